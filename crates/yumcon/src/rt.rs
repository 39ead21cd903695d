use std::future::Future;

/// Runs a client future to completion on a lazily created current-thread
/// runtime. CLI commands and TUI job threads block here; the TUI event
/// loop itself never does.
pub fn block_on<F: Future>(future: F) -> F::Output {
    thread_local! {
        static RUNTIME: std::cell::RefCell<Option<tokio::runtime::Runtime>> =
            const { std::cell::RefCell::new(None) };
    }

    RUNTIME.with(|cell| {
        let mut runtime = cell.borrow_mut();
        if runtime.is_none() {
            let created = tokio::runtime::Builder::new_current_thread()
                .enable_all()
                .build()
                .expect("create client runtime");
            *runtime = Some(created);
        }
        runtime
            .as_mut()
            .expect("client runtime initialized")
            .block_on(future)
    })
}
