use crate::models::{LineItem, ParsedReceipt, StoreNamePolicy};
use crate::service::patterns::{DATE, LINE_ITEM, STORE_NAME, SUBTOTAL, TAX, TOTAL};
use bigdecimal::BigDecimal;
use regex::Regex;
use std::str::FromStr;

/// 小票文本抽取器
///
/// 纯函数式: 不持有可变状态，任意输入都返回完整的 `ParsedReceipt`，
/// 匹配不到的字段为 `None`。
#[derive(Debug, Clone, Copy, Default)]
pub struct ReceiptExtractor {
    store_name_policy: StoreNamePolicy,
}

/// 使用默认店名策略抽取
pub fn extract_receipt(text: &str) -> ParsedReceipt {
    ReceiptExtractor::default().extract(text)
}

impl ReceiptExtractor {
    pub fn new(store_name_policy: StoreNamePolicy) -> Self {
        Self { store_name_policy }
    }

    pub fn store_name_policy(&self) -> StoreNamePolicy {
        self.store_name_policy
    }

    pub fn extract(&self, text: &str) -> ParsedReceipt {
        let receipt = ParsedReceipt {
            store_name: self.store_name(text),
            date: DATE.find(text).map(|m| m.as_str().to_string()),
            subtotal: first_amount(&SUBTOTAL, text),
            tax: first_amount(&TAX, text),
            total: total(text),
            items: line_items(text),
        };

        tracing::debug!(
            "Extracted receipt: store={:?}, date={:?}, total={:?}, items={}",
            receipt.store_name,
            receipt.date,
            receipt.total,
            receipt.items.len()
        );

        receipt
    }

    fn store_name(&self, text: &str) -> Option<String> {
        let name = match self.store_name_policy {
            StoreNamePolicy::Pattern => text
                .lines()
                .map(str::trim)
                .find(|line| line.chars().count() >= 3 && STORE_NAME.is_match(line)),
            StoreNamePolicy::FirstLine => text.lines().next().map(str::trim),
        };
        name.filter(|n| !n.is_empty()).map(str::to_string)
    }
}

/// 关键字后的第一个金额
fn first_amount(pattern: &Regex, text: &str) -> Option<BigDecimal> {
    pattern.captures(text).and_then(|caps| parse_amount(&caps[1]))
}

/// 合计: 跳过以 "sub" 开头的命中 (那是小计)
fn total(text: &str) -> Option<BigDecimal> {
    TOTAL
        .captures_iter(text)
        .find(|caps| caps.get(1).is_none())
        .and_then(|caps| parse_amount(&caps[2]))
}

fn line_items(text: &str) -> Vec<LineItem> {
    text.lines()
        .filter_map(|line| {
            let caps = LINE_ITEM.captures(line.trim())?;
            let quantity = match caps.get(2) {
                Some(q) => q.as_str().parse().ok()?,
                None => 1,
            };
            Some(LineItem {
                product: caps[1].trim().to_string(),
                quantity,
                price: parse_amount(&caps[3])?,
            })
        })
        .collect()
}

/// "1,234.56" -> 1234.56
fn parse_amount(s: &str) -> Option<BigDecimal> {
    BigDecimal::from_str(&s.replace(',', "")).ok()
}
