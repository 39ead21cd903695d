use crate::http::send_expecting_success;
use crate::models::{RepoListResponse, static_summaries};
use anyhow::Context;
use reqwest::{Client, Url};
use serde_json::Value;
use tracing::debug;
use yumcon_core::model::StaticRepoSummary;
use yumcon_core::service::{RepoService, ServiceFuture};

/// HTTP client for the repository-management API, rooted at the server
/// base URL. All repository resources live under `repo/`; artifact
/// propagation has its own top-level endpoint.
pub struct YumClient {
    http: Client,
    base: Url,
}

impl YumClient {
    pub fn new(server_url: &str) -> anyhow::Result<Self> {
        let base = Url::parse(server_url).context("parse server url")?;
        if base.cannot_be_a_base() {
            anyhow::bail!("server url cannot serve as a base: {server_url}");
        }
        Ok(Self {
            http: Client::new(),
            base,
        })
    }

    /// Joins path segments onto the base URL. Segments may themselves
    /// contain slashes (artifact hrefs do); each part becomes its own
    /// encoded segment so separators survive.
    fn url(&self, segments: &[&str], trailing_slash: bool) -> Url {
        let mut url = self.base.clone();
        {
            let mut path = url
                .path_segments_mut()
                .expect("base url validated in YumClient::new");
            path.pop_if_empty();
            for segment in segments {
                for part in segment.split('/').filter(|part| !part.is_empty()) {
                    path.push(part);
                }
            }
            if trailing_slash {
                path.push("");
            }
        }
        url
    }

    fn obsolete_rpms_url(&self, target_repo: &str, source_repo: &str) -> Url {
        let mut url = self.url(&["repo"], true);
        url.query_pairs_mut()
            .append_pair("targetRepo", target_repo)
            .append_pair("sourceRepo", source_repo);
        url
    }

    async fn fetch_static_repos(&self) -> anyhow::Result<Vec<StaticRepoSummary>> {
        let url = self.url(&["repo"], true);
        debug!(%url, "listing static repos");
        let response = send_expecting_success("loading repositories", self.http.get(url)).await?;
        let payload: RepoListResponse = response.json().await.context("decode repo listing")?;
        Ok(static_summaries(payload))
    }

    async fn post_virtual_repo(&self, name: &str, destination: &str) -> anyhow::Result<()> {
        let url = self.url(&["repo", "virtual"], false);
        debug!(%url, name, destination, "saving virtual repo target");
        let builder = self
            .http
            .post(url)
            .form(&[("name", name), ("destination", destination)]);
        send_expecting_success("Saving", builder).await?;
        Ok(())
    }

    async fn put_repo_property(
        &self,
        repo: &str,
        property: &str,
        value: Value,
    ) -> anyhow::Result<()> {
        let url = self.url(&["repo", repo, property], false);
        debug!(%url, %value, "setting repo property");
        send_expecting_success("Saving", self.http.put(url).json(&value)).await?;
        Ok(())
    }

    async fn delete_tags(&self, repo: &str) -> anyhow::Result<()> {
        let url = self.url(&["repo", repo, "tags"], false);
        debug!(%url, "deleting all tags");
        send_expecting_success("Resetting tags", self.http.delete(url)).await?;
        Ok(())
    }

    async fn post_tag(&self, repo: &str, tag: &str) -> anyhow::Result<()> {
        let url = self.url(&["repo", repo, "tags"], false);
        debug!(%url, tag, "adding tag");
        let builder = self.http.post(url).form(&[("tag", tag)]);
        send_expecting_success("Saving", builder).await?;
        Ok(())
    }

    async fn delete_artifact(&self, repo_path: &str, href: &str) -> anyhow::Result<()> {
        let url = self.url(&["repo", repo_path, href], false);
        debug!(%url, "deleting artifact");
        send_expecting_success("deleting file", self.http.delete(url)).await?;
        Ok(())
    }

    async fn delete_obsolete(&self, target_repo: &str, source_repo: &str) -> anyhow::Result<()> {
        let url = self.obsolete_rpms_url(target_repo, source_repo);
        debug!(%url, "triggering obsolete artifact deletion");
        send_expecting_success("deleting file", self.http.delete(url)).await?;
        Ok(())
    }

    async fn post_propagation(&self, source: &str, destination: &str) -> anyhow::Result<()> {
        let url = self.url(&["propagation"], false);
        debug!(%url, source, destination, "propagating artifact");
        let builder = self
            .http
            .post(url)
            .form(&[("source", source), ("destination", destination)]);
        send_expecting_success("propagating RPM", builder).await?;
        Ok(())
    }
}

impl RepoService for YumClient {
    fn list_static_repos(&self) -> ServiceFuture<'_, Vec<StaticRepoSummary>> {
        Box::pin(self.fetch_static_repos())
    }

    fn save_virtual_repo<'a>(
        &'a self,
        name: &'a str,
        destination: &'a str,
    ) -> ServiceFuture<'a, ()> {
        Box::pin(self.post_virtual_repo(name, destination))
    }

    fn set_repo_property<'a>(
        &'a self,
        repo: &'a str,
        property: &'a str,
        value: Value,
    ) -> ServiceFuture<'a, ()> {
        Box::pin(self.put_repo_property(repo, property, value))
    }

    fn delete_all_tags<'a>(&'a self, repo: &'a str) -> ServiceFuture<'a, ()> {
        Box::pin(self.delete_tags(repo))
    }

    fn add_tag<'a>(&'a self, repo: &'a str, tag: &'a str) -> ServiceFuture<'a, ()> {
        Box::pin(self.post_tag(repo, tag))
    }

    fn delete_rpm<'a>(&'a self, repo_path: &'a str, href: &'a str) -> ServiceFuture<'a, ()> {
        Box::pin(self.delete_artifact(repo_path, href))
    }

    fn delete_obsolete_rpms<'a>(
        &'a self,
        target_repo: &'a str,
        source_repo: &'a str,
    ) -> ServiceFuture<'a, ()> {
        Box::pin(self.delete_obsolete(target_repo, source_repo))
    }

    fn propagate_rpm<'a>(
        &'a self,
        source: &'a str,
        destination: &'a str,
    ) -> ServiceFuture<'a, ()> {
        Box::pin(self.post_propagation(source, destination))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> YumClient {
        YumClient::new("http://repo.example/console/").unwrap()
    }

    #[test]
    fn new_rejects_non_base_urls() {
        assert!(YumClient::new("mailto:admin@example.com").is_err());
        assert!(YumClient::new("not a url").is_err());
    }

    #[test]
    fn listing_url_keeps_trailing_slash() {
        let url = client().url(&["repo"], true);
        assert_eq!(url.as_str(), "http://repo.example/console/repo/");
    }

    #[test]
    fn property_url_nests_repo_and_property() {
        let url = client().url(&["repo", "centos7", "maxKeepRpms"], false);
        assert_eq!(
            url.as_str(),
            "http://repo.example/console/repo/centos7/maxKeepRpms"
        );
    }

    #[test]
    fn artifact_urls_preserve_slashes_in_hrefs() {
        let url = client().url(&["repo", "centos7", "noarch/tool-1.0.rpm"], false);
        assert_eq!(
            url.as_str(),
            "http://repo.example/console/repo/centos7/noarch/tool-1.0.rpm"
        );
    }

    #[test]
    fn obsolete_url_carries_both_repos_as_query() {
        let url = client().obsolete_rpms_url("centos7", "centos7-incoming");
        assert_eq!(
            url.as_str(),
            "http://repo.example/console/repo/?targetRepo=centos7&sourceRepo=centos7-incoming"
        );
    }

    #[test]
    fn base_without_trailing_slash_works_too() {
        let client = YumClient::new("http://repo.example").unwrap();
        let url = client.url(&["repo", "virtual"], false);
        assert_eq!(url.as_str(), "http://repo.example/repo/virtual");
    }
}
