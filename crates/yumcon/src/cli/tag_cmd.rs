use super::*;
use yumcon_core::model::Tag;

pub(super) fn handle_tag(
    tag_args: TagArgs,
    service: &dyn RepoService,
    audit: &AuditLog,
) -> anyhow::Result<()> {
    match tag_args.command {
        TagCommands::Add(add) => {
            let result = rt::block_on(service.add_tag(&add.repo, &add.tag));
            record_audit(audit, "tags.add", Some(&add.repo), &result);
            result
        }
        TagCommands::Reset(reset) => {
            let tags: Vec<Tag> = reset
                .tags
                .into_iter()
                .map(|name| Tag { name })
                .collect();
            let result = rt::block_on(service.reset_tags(&reset.repo, &tags));
            record_audit(audit, "tags.reset", Some(&reset.repo), &result);
            result?;
            println!("{} now has {} tag(s)", reset.repo, tags.len());
            Ok(())
        }
    }
}
