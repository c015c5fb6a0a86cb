use crate::articles::ArticleSummary;

/// 判断查询串是否命中一篇文章。
///
/// 大小写不敏感的子串匹配，命中范围：标题、描述、任一标签、作者名。
pub fn matches(article: &ArticleSummary, query: &str) -> bool {
    matches_lowercase(article, &query.to_lowercase())
}

/// 过滤文章集合，返回命中查询的子集。
///
/// 纯函数：相同的集合与查询总是得到相同的结果，空查询返回全集。
pub fn filter<'a>(articles: &'a [ArticleSummary], query: &str) -> Vec<&'a ArticleSummary> {
    let query = query.to_lowercase();

    articles
        .iter()
        .filter(|article| matches_lowercase(article, &query))
        .collect()
}

fn matches_lowercase(article: &ArticleSummary, query: &str) -> bool {
    article.title.to_lowercase().contains(query)
        || article.description.to_lowercase().contains(query)
        || article.tags.iter().any(|tag| tag.to_lowercase().contains(query))
        || article.author.name.to_lowercase().contains(query)
}
