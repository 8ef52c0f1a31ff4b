// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use scraper::{Html, Selector};

/// 判断页面正文是否同时包含两个关键词
///
/// 解析HTML后取body元素的可见文本，小写后做子串匹配。
/// 两个关键词都命中才算匹配；页面没有body元素时视为不匹配。
pub fn contains_keywords(html: &str, keyword1: &str, keyword2: &str) -> bool {
    let document = Html::parse_document(html);
    let selector = Selector::parse("body").unwrap();

    let Some(body) = document.select(&selector).next() else {
        return false;
    };

    let text = body.text().collect::<Vec<_>>().join(" ").to_lowercase();

    text.contains(&keyword1.to_lowercase()) && text.contains(&keyword2.to_lowercase())
}
