use serde::Deserialize;
use yumcon_core::model::StaticRepoSummary;

/// Folder listing returned by `GET repo/`. Only the names matter to the
/// console; the remaining folder metadata is ignored.
#[derive(Debug, Deserialize)]
pub(crate) struct RepoListResponse {
    pub(crate) items: Vec<RepoFolder>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RepoFolder {
    pub(crate) name: String,
}

pub(crate) fn static_summaries(response: RepoListResponse) -> Vec<StaticRepoSummary> {
    response
        .items
        .into_iter()
        .map(|folder| StaticRepoSummary { name: folder.name })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn listing_keeps_names_and_drops_extra_fields() {
        let value = json!({
            "path": "",
            "items": [
                { "name": "centos7", "size": 1024, "lastModified": 1400000000 },
                { "name": "centos8", "size": 2048 }
            ]
        });
        let response: RepoListResponse = serde_json::from_value(value).unwrap();
        let repos = static_summaries(response);
        assert_eq!(
            repos,
            vec![
                StaticRepoSummary {
                    name: "centos7".to_string()
                },
                StaticRepoSummary {
                    name: "centos8".to_string()
                }
            ]
        );
    }

    #[test]
    fn empty_listing_yields_no_summaries() {
        let response: RepoListResponse = serde_json::from_value(json!({ "items": [] })).unwrap();
        assert!(static_summaries(response).is_empty());
    }
}
