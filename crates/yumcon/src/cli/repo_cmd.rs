use super::*;
use serde_json::Value;
use yumcon_core::retention::Retention;

pub(super) fn handle_repo(
    repo_args: RepoArgs,
    service: &dyn RepoService,
    audit: &AuditLog,
) -> anyhow::Result<()> {
    match repo_args.command {
        RepoCommands::SetType(set_type) => {
            let repo_type: RepoType = set_type.repo_type.into();
            let result = rt::block_on(service.set_repo_type(&set_type.name, repo_type));
            record_audit(audit, "repo.set_type", Some(&set_type.name), &result);
            result?;
            println!("{} is now {repo_type}", set_type.name);
            Ok(())
        }
        RepoCommands::Retention(retention_args) => {
            let retention = Retention::clamped(
                retention_args.max_keep.unwrap_or(0),
                retention_args.max_days.unwrap_or(0),
            );
            if retention_args.max_keep.is_some() {
                let result =
                    rt::block_on(service.set_max_keep_rpms(&retention_args.name, retention.max_keep_rpms));
                record_audit(audit, "repo.max_keep_rpms", Some(&retention_args.name), &result);
                result?;
                println!("maxKeepRpms = {}", retention.keep_rpms_label());
            }
            if retention_args.max_days.is_some() {
                let result =
                    rt::block_on(service.set_max_days_rpms(&retention_args.name, retention.max_days_rpms));
                record_audit(audit, "repo.max_days_rpms", Some(&retention_args.name), &result);
                result?;
                println!("maxDaysRpms = {}", retention.days_rpms_label());
            }
            Ok(())
        }
        RepoCommands::SetProperty(set_property) => {
            let value = parse_property_value(&set_property.value);
            let result = rt::block_on(service.set_repo_property(
                &set_property.name,
                &set_property.property,
                value,
            ));
            record_audit(audit, "repo.set_property", Some(&set_property.name), &result);
            result
        }
    }
}

/// Values that parse as JSON are sent as-is; anything else is sent as a
/// JSON string, so `--value 5` is a number and `--value stable` a string.
pub(super) fn parse_property_value(raw: &str) -> Value {
    serde_json::from_str(raw).unwrap_or_else(|_| Value::String(raw.to_string()))
}
