use crate::model::{RepoType, StaticRepoSummary, Tag};
use serde_json::Value;
use std::future::Future;
use std::pin::Pin;

pub type ServiceFuture<'a, T> =
    Pin<Box<dyn Future<Output = anyhow::Result<T>> + Send + 'a>>;

/// Client-side view of the repository-management HTTP API. Implemented by
/// the reqwest client in `yumcon-api`; tests substitute an in-memory fake.
pub trait RepoService: Send + Sync {
    fn list_static_repos(&self) -> ServiceFuture<'_, Vec<StaticRepoSummary>>;
    fn save_virtual_repo<'a>(
        &'a self,
        name: &'a str,
        destination: &'a str,
    ) -> ServiceFuture<'a, ()>;
    fn set_repo_property<'a>(
        &'a self,
        repo: &'a str,
        property: &'a str,
        value: Value,
    ) -> ServiceFuture<'a, ()>;
    fn delete_all_tags<'a>(&'a self, repo: &'a str) -> ServiceFuture<'a, ()>;
    fn add_tag<'a>(&'a self, repo: &'a str, tag: &'a str) -> ServiceFuture<'a, ()>;
    fn delete_rpm<'a>(&'a self, repo_path: &'a str, href: &'a str) -> ServiceFuture<'a, ()>;
    fn delete_obsolete_rpms<'a>(
        &'a self,
        target_repo: &'a str,
        source_repo: &'a str,
    ) -> ServiceFuture<'a, ()>;
    fn propagate_rpm<'a>(
        &'a self,
        source: &'a str,
        destination: &'a str,
    ) -> ServiceFuture<'a, ()>;

    fn set_repo_type<'a>(&'a self, repo: &'a str, repo_type: RepoType) -> ServiceFuture<'a, ()> {
        self.set_repo_property(repo, "type", Value::from(repo_type.wire_value()))
    }

    fn set_max_keep_rpms<'a>(&'a self, repo: &'a str, value: u32) -> ServiceFuture<'a, ()> {
        self.set_repo_property(repo, "maxKeepRpms", Value::from(value))
    }

    fn set_max_days_rpms<'a>(&'a self, repo: &'a str, value: u32) -> ServiceFuture<'a, ()> {
        self.set_repo_property(repo, "maxDaysRpms", Value::from(value))
    }

    /// Replaces the full tag set: clears server-side tags, then re-adds the
    /// given ones one request at a time.
    fn reset_tags<'a>(&'a self, repo: &'a str, tags: &'a [Tag]) -> ServiceFuture<'a, ()> {
        Box::pin(async move {
            self.delete_all_tags(repo).await?;
            for tag in tags {
                self.add_tag(repo, &tag.name).await?;
            }
            Ok(())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    #[derive(Default)]
    struct RecordingService {
        calls: Mutex<Vec<String>>,
    }

    impl RecordingService {
        fn record(&self, call: String) -> ServiceFuture<'_, ()> {
            self.calls.lock().unwrap().push(call);
            Box::pin(async { Ok(()) })
        }
    }

    impl RepoService for RecordingService {
        fn list_static_repos(&self) -> ServiceFuture<'_, Vec<StaticRepoSummary>> {
            Box::pin(async { Ok(Vec::new()) })
        }

        fn save_virtual_repo<'a>(
            &'a self,
            name: &'a str,
            destination: &'a str,
        ) -> ServiceFuture<'a, ()> {
            self.record(format!("save {name} {destination}"))
        }

        fn set_repo_property<'a>(
            &'a self,
            repo: &'a str,
            property: &'a str,
            value: Value,
        ) -> ServiceFuture<'a, ()> {
            self.record(format!("put {repo}/{property} {value}"))
        }

        fn delete_all_tags<'a>(&'a self, repo: &'a str) -> ServiceFuture<'a, ()> {
            self.record(format!("delete {repo}/tags"))
        }

        fn add_tag<'a>(&'a self, repo: &'a str, tag: &'a str) -> ServiceFuture<'a, ()> {
            self.record(format!("add {repo}/tags {tag}"))
        }

        fn delete_rpm<'a>(&'a self, repo_path: &'a str, href: &'a str) -> ServiceFuture<'a, ()> {
            self.record(format!("delete {repo_path}/{href}"))
        }

        fn delete_obsolete_rpms<'a>(
            &'a self,
            target_repo: &'a str,
            source_repo: &'a str,
        ) -> ServiceFuture<'a, ()> {
            self.record(format!("obsolete {target_repo} {source_repo}"))
        }

        fn propagate_rpm<'a>(
            &'a self,
            source: &'a str,
            destination: &'a str,
        ) -> ServiceFuture<'a, ()> {
            self.record(format!("propagate {source} {destination}"))
        }
    }

    fn drive<T>(future: ServiceFuture<'_, T>) -> anyhow::Result<T> {
        // Fakes resolve immediately; a trivial executor is enough here.
        use std::task::{Context, Poll, RawWaker, RawWakerVTable, Waker};

        fn raw_waker() -> RawWaker {
            unsafe fn clone(_: *const ()) -> RawWaker {
                raw_waker()
            }
            unsafe fn no_op(_: *const ()) {}
            RawWaker::new(
                std::ptr::null(),
                &RawWakerVTable::new(clone, no_op, no_op, no_op),
            )
        }

        let waker = unsafe { Waker::from_raw(raw_waker()) };
        let mut cx = Context::from_waker(&waker);
        let mut future = future;
        loop {
            match future.as_mut().poll(&mut cx) {
                Poll::Ready(value) => return value,
                Poll::Pending => std::thread::yield_now(),
            }
        }
    }

    #[test]
    fn set_repo_type_puts_wire_value() {
        let service = RecordingService::default();
        drive(service.set_repo_type("centos7", RepoType::Scheduled)).unwrap();
        assert_eq!(
            service.calls.lock().unwrap().as_slice(),
            ["put centos7/type \"SCHEDULED\""]
        );
    }

    #[test]
    fn retention_setters_target_the_right_properties() {
        let service = RecordingService::default();
        drive(service.set_max_keep_rpms("centos7", 3)).unwrap();
        drive(service.set_max_days_rpms("centos7", 14)).unwrap();
        assert_eq!(
            service.calls.lock().unwrap().as_slice(),
            ["put centos7/maxKeepRpms 3", "put centos7/maxDaysRpms 14"]
        );
    }

    #[test]
    fn reset_tags_clears_then_adds_in_order() {
        let service = RecordingService::default();
        let tags = vec![
            Tag {
                name: "stable".to_string(),
            },
            Tag {
                name: "qa".to_string(),
            },
        ];
        drive(service.reset_tags("centos7", &tags)).unwrap();
        assert_eq!(
            service.calls.lock().unwrap().as_slice(),
            [
                "delete centos7/tags",
                "add centos7/tags stable",
                "add centos7/tags qa"
            ]
        );
    }
}
