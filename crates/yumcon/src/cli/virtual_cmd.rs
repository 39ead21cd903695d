use super::*;
use yumcon_core::model::{RepoTarget, VirtualRepoConfig};
use yumcon_core::virtual_target::{TargetOption, VirtualTargetEditor};

pub(super) fn handle_repos(service: &dyn RepoService) -> anyhow::Result<()> {
    let repos = rt::block_on(service.list_static_repos())?;
    for repo in repos {
        println!("{}", repo.name);
    }
    Ok(())
}

pub(super) fn handle_virtual(
    virtual_args: VirtualArgs,
    service: &dyn RepoService,
    audit: &AuditLog,
) -> anyhow::Result<()> {
    match virtual_args.command {
        VirtualCommands::Set(set) => {
            let target = match (set.repo, set.url) {
                (Some(name), None) => RepoTarget::Static(name),
                (None, Some(url)) => RepoTarget::External(url),
                _ => anyhow::bail!("pass exactly one of --repo or --url"),
            };
            let destination = target.wire_value();
            let result = rt::block_on(service.save_virtual_repo(&set.name, &destination));
            record_audit(audit, "virtual.save", Some(&set.name), &result);
            result?;
            println!("{} -> {destination}", set.name);
            Ok(())
        }
        VirtualCommands::Options(options_args) => {
            let mut editor = VirtualTargetEditor::new(VirtualRepoConfig {
                name: options_args.name,
                external: false,
                target: options_args.current,
            });
            let repos = rt::block_on(service.list_static_repos())?;
            editor.attach_repos(repos);
            for option in editor.target_options() {
                println!("{}", option_line(&option));
            }
            Ok(())
        }
    }
}

pub(super) fn option_line(option: &TargetOption) -> String {
    let marker = if option.selected { '*' } else { ' ' };
    format!("{marker} {} [{}]", option.label, option.value)
}
