use super::*;

pub(super) fn handle_rpm(
    rpm_args: RpmArgs,
    service: &dyn RepoService,
    audit: &AuditLog,
) -> anyhow::Result<()> {
    match rpm_args.command {
        RpmCommands::Delete(delete) => {
            let result = rt::block_on(service.delete_rpm(&delete.repo_path, &delete.href));
            record_audit(audit, "rpm.delete", Some(&delete.repo_path), &result);
            result
        }
        RpmCommands::CleanObsolete(clean) => {
            let result = rt::block_on(service.delete_obsolete_rpms(&clean.target, &clean.source));
            record_audit(audit, "rpm.clean_obsolete", Some(&clean.target), &result);
            result?;
            // The server deletes in rate-limited batches; completion is not
            // observable from this call.
            println!(
                "Deletion of obsolete RPMs triggered; the server works through them asynchronously."
            );
            Ok(())
        }
        RpmCommands::Propagate(propagate) => {
            let result =
                rt::block_on(service.propagate_rpm(&propagate.source, &propagate.destination));
            record_audit(audit, "rpm.propagate", Some(&propagate.destination), &result);
            result?;
            println!("{} -> {}", propagate.source, propagate.destination);
            Ok(())
        }
    }
}
