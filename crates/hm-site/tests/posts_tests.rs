use async_trait::async_trait;
use hm_site::{EMPTY_PLACEHOLDER, Post, PostProvider, Result, SiteInfo, post_index};

fn sample_site() -> SiteInfo {
    SiteInfo {
        name: "Hildebrandt Management".to_string(),
        description: "Zarządzanie i rozwój firm".to_string(),
    }
}

fn sample_posts() -> Vec<Post> {
    vec![
        Post {
            title: "Interim management w praktyce".to_string(),
            permalink: "https://example.com/interim".to_string(),
            excerpt: "Kiedy warto sięgnąć po menedżera na czas transformacji.".to_string(),
        },
        Post {
            title: "Budżet inwestycji pod kontrolą".to_string(),
            permalink: "https://example.com/budzet".to_string(),
            excerpt: "Trzy sygnały, że projekt przekroczy budżet.".to_string(),
        },
        Post {
            title: "Harmonogram, który się broni".to_string(),
            permalink: "https://example.com/harmonogram".to_string(),
            excerpt: "Jak planować odbiory bez poślizgu.".to_string(),
        },
    ]
}

fn occurrences(haystack: &str, needle: &str) -> usize {
    haystack.match_indices(needle).count()
}

#[test]
fn empty_post_sequence_renders_placeholder_and_no_articles() {
    let html = post_index(&sample_site(), &[]).into_string();

    assert_eq!(occurrences(&html, EMPTY_PLACEHOLDER), 1);
    assert_eq!(occurrences(&html, "<article"), 0);
}

#[test]
fn each_post_renders_one_article_with_its_fields() {
    let posts = sample_posts();
    let html = post_index(&sample_site(), &posts).into_string();

    assert_eq!(occurrences(&html, "<article"), posts.len());
    assert!(!html.contains(EMPTY_PLACEHOLDER));

    let mut from = 0;
    for post in &posts {
        let link = format!("href=\"{}\"", post.permalink);
        let pos = html[from..]
            .find(&link)
            .unwrap_or_else(|| panic!("missing link for {}", post.title));
        from += pos;
        assert!(html[from..].contains(&post.title));
        assert!(html[from..].contains(&post.excerpt));
    }
}

#[test]
fn index_hero_uses_host_site_metadata() {
    let site = sample_site();
    let html = post_index(&site, &[]).into_string();

    assert!(html.contains(&site.name));
    assert!(html.contains(&site.description));
    assert!(html.contains("<html lang=\"pl\">"));
}

#[test]
fn post_fields_are_html_escaped() {
    let site = sample_site();
    let posts = vec![Post {
        title: "<b>Ważne</b> & pilne".to_string(),
        permalink: "https://example.com/wazne".to_string(),
        excerpt: "Fragment z <i>markupem</i>".to_string(),
    }];
    let html = post_index(&site, &posts).into_string();

    assert!(html.contains("&lt;b&gt;Ważne&lt;/b&gt; &amp; pilne"));
    assert!(html.contains("Fragment z &lt;i&gt;markupem&lt;/i&gt;"));
    assert!(!html.contains("<b>Ważne</b>"));
}

#[test]
fn index_rendering_is_idempotent() {
    let site = sample_site();
    let posts = sample_posts();

    let first = post_index(&site, &posts).into_string();
    let second = post_index(&site, &posts).into_string();
    assert_eq!(first, second);
}

/// Fixture provider standing in for the external host.
struct FixedPosts {
    site: SiteInfo,
    posts: Vec<Post>,
}

#[async_trait]
impl PostProvider for FixedPosts {
    async fn site_info(&self) -> Result<SiteInfo> {
        Ok(self.site.clone())
    }

    async fn recent_posts(&self) -> Result<Vec<Post>> {
        Ok(self.posts.clone())
    }
}

#[tokio::test]
async fn provider_output_flows_into_the_index_template() {
    let provider = FixedPosts {
        site: sample_site(),
        posts: sample_posts(),
    };

    let site = provider.site_info().await.unwrap();
    let posts = provider.recent_posts().await.unwrap();
    let html = post_index(&site, &posts).into_string();

    assert_eq!(occurrences(&html, "<article"), 3);
    assert!(html.contains("Interim management w praktyce"));
}
