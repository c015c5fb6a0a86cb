use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer};

/// 文章摘要，列表视图使用的轻量表示。
///
/// 一次集合拉取后不再变化，生命周期与该次拉取一致。
#[derive(Debug, Clone, Deserialize)]
pub struct ArticleSummary {
    pub id: u32,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(rename = "social_image", default)]
    pub cover_image: String,
    pub created_at: DateTime<Utc>,
    #[serde(rename = "tag_list", deserialize_with = "tags_field", default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub reactions_count: u32,
    #[serde(rename = "user")]
    pub author: Author,
}

/// 完整文章，列表字段之外包括正文、规范链接、各项计数与作者档案。
#[derive(Debug, Clone, Deserialize)]
pub struct ArticleDetail {
    pub id: u32,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub body_html: String,
    #[serde(rename = "social_image", default)]
    pub cover_image: String,
    pub created_at: DateTime<Utc>,
    #[serde(deserialize_with = "tags_field", default)]
    pub tags: Vec<String>,
    pub canonical_url: String,
    #[serde(default)]
    pub comments_count: u32,
    #[serde(default)]
    pub public_reactions_count: u32,
    #[serde(default)]
    pub positive_reactions_count: u32,
    #[serde(default)]
    pub reading_time_minutes: u32,
    #[serde(rename = "user")]
    pub author: AuthorProfile,
}

/// 文章作者，列表条目内嵌的简化表示。
#[derive(Debug, Clone, Deserialize)]
pub struct Author {
    pub name: String,
    #[serde(rename = "profile_image_90", default)]
    pub avatar: String,
}

/// 作者档案，详情视图使用，附带社交账号。
#[derive(Debug, Clone, Deserialize)]
pub struct AuthorProfile {
    pub name: String,
    #[serde(rename = "profile_image_90", default)]
    pub avatar: String,
    #[serde(default)]
    pub twitter_username: Option<String>,
    #[serde(default)]
    pub github_username: Option<String>,
    #[serde(default)]
    pub website_url: Option<String>,
}

/// 将时间戳渲染为 `Jun 1, 2024` 形式的展示文本。
///
/// 仅用于展示，原始时间值不做任何修改。
pub fn display_date(datetime: &DateTime<Utc>) -> String {
    datetime.format("%b %-d, %Y").to_string()
}

/// 上游的标签字段形态不一致：有时是 `["go","rust"]`，
/// 有时是 `"go,rust,web"`。在反序列化边界统一为列表，
/// 逗号分隔形式会去除空白并丢弃空段。
fn tags_field<'de, D>(deserializer: D) -> std::result::Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum TagsField {
        List(Vec<String>),
        Joined(String),
    }

    Ok(match TagsField::deserialize(deserializer)? {
        TagsField::List(tags) => tags,
        TagsField::Joined(joined) => joined
            .split(',')
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .map(str::to_string)
            .collect(),
    })
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_summary_deserializes_devto_payload() {
        let summary: ArticleSummary = serde_json::from_value(json!({
            "id": 42,
            "title": "Ownership in practice",
            "description": "Borrowing without fear",
            "social_image": "https://img.example/42.png",
            "created_at": "2024-06-01T08:30:00Z",
            "tag_list": ["rust", "beginners"],
            "reactions_count": 17,
            "user": {
                "name": "Ada",
                "profile_image_90": "https://img.example/ada.png"
            }
        }))
        .expect("反序列化文章摘要失败");

        assert_eq!(summary.id, 42);
        assert_eq!(summary.tags, vec!["rust", "beginners"]);
        assert_eq!(summary.author.name, "Ada");
    }

    #[test]
    fn test_detail_normalizes_joined_tags() {
        let detail: ArticleDetail = serde_json::from_value(json!({
            "id": 7,
            "title": "Async pitfalls",
            "description": "",
            "body_html": "<p>body</p>",
            "social_image": "https://img.example/7.png",
            "created_at": "2024-06-01T08:30:00Z",
            "tags": "go,rust,web",
            "canonical_url": "https://dev.to/ada/async-pitfalls",
            "comments_count": 3,
            "public_reactions_count": 20,
            "positive_reactions_count": 19,
            "reading_time_minutes": 6,
            "user": {
                "name": "Ada",
                "profile_image_90": "https://img.example/ada.png",
                "github_username": "ada"
            }
        }))
        .expect("反序列化文章详情失败");

        assert_eq!(detail.tags, vec!["go", "rust", "web"]);
        assert_eq!(detail.author.github_username.as_deref(), Some("ada"));
        assert_eq!(detail.author.twitter_username, None);
    }

    #[test]
    fn test_joined_tags_trim_and_drop_empty_segments() {
        let detail: ArticleDetail = serde_json::from_value(json!({
            "id": 8,
            "title": "t",
            "body_html": "<p></p>",
            "created_at": "2024-06-01T08:30:00Z",
            "tags": " go , rust ,,web, ",
            "canonical_url": "https://dev.to/a/8",
            "user": { "name": "Ada" }
        }))
        .expect("反序列化文章详情失败");

        assert_eq!(detail.tags, vec!["go", "rust", "web"]);
    }

    #[test]
    fn test_list_tags_are_identity() {
        let detail: ArticleDetail = serde_json::from_value(json!({
            "id": 9,
            "title": "t",
            "body_html": "<p></p>",
            "created_at": "2024-06-01T08:30:00Z",
            "tags": ["go", "rust"],
            "canonical_url": "https://dev.to/a/9",
            "user": { "name": "Ada" }
        }))
        .expect("反序列化文章详情失败");

        assert_eq!(detail.tags, vec!["go", "rust"]);
    }

    #[test]
    fn test_display_date() {
        let datetime: DateTime<Utc> = "2024-06-01T08:30:00Z".parse().expect("解析时间失败");

        assert_eq!(display_date(&datetime), "Jun 1, 2024");

        let datetime: DateTime<Utc> = "2023-12-25T00:00:00Z".parse().expect("解析时间失败");

        assert_eq!(display_date(&datetime), "Dec 25, 2023");
    }
}
