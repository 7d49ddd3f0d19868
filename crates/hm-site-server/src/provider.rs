//! In-memory post provider backed by server configuration
//!
//! Stands in for the external content host: site metadata comes from the
//! environment, the post set is fixed at startup.

use async_trait::async_trait;
use hm_site::{Post, PostProvider, SiteInfo};

use crate::config::ServerConfig;

pub struct ConfigPosts {
    site: SiteInfo,
    posts: Vec<Post>,
}

impl ConfigPosts {
    /// Create a provider with the configured site metadata and no posts.
    pub fn from_config(config: &ServerConfig) -> Self {
        Self {
            site: SiteInfo {
                name: config.site_name.clone(),
                description: config.site_description.clone(),
            },
            posts: Vec::new(),
        }
    }

    /// Replace the fixed post set.
    pub fn with_posts(mut self, posts: Vec<Post>) -> Self {
        self.posts = posts;
        self
    }
}

#[async_trait]
impl PostProvider for ConfigPosts {
    async fn site_info(&self) -> hm_site::Result<SiteInfo> {
        Ok(self.site.clone())
    }

    async fn recent_posts(&self) -> hm_site::Result<Vec<Post>> {
        Ok(self.posts.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn from_config_uses_configured_site_metadata() {
        let config = ServerConfig::default();
        let provider = ConfigPosts::from_config(&config);

        let site = provider.site_info().await.unwrap();
        assert_eq!(site.name, config.site_name);
        assert_eq!(site.description, config.site_description);
        assert!(provider.recent_posts().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn with_posts_replaces_the_post_set() {
        let provider = ConfigPosts::from_config(&ServerConfig::default()).with_posts(vec![Post {
            title: "Tytuł".to_string(),
            permalink: "https://example.com/tytul".to_string(),
            excerpt: "Fragment".to_string(),
        }]);

        assert_eq!(provider.recent_posts().await.unwrap().len(), 1);
    }
}
