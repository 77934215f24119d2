use bigdecimal::BigDecimal;
use serde::{Deserialize, Serialize};

/// 小票解析结果
///
/// 未匹配的字段序列化为 `null`，不使用空字符串。
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ParsedReceipt {
    pub store_name: Option<String>,
    pub date: Option<String>,
    pub subtotal: Option<BigDecimal>,
    pub tax: Option<BigDecimal>,
    pub total: Option<BigDecimal>,
    pub items: Vec<LineItem>,
}

/// 商品明细行
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    pub product: String,
    pub quantity: u32,
    pub price: BigDecimal,
}

/// 店名识别策略
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StoreNamePolicy {
    /// 第一行由大写字母、空格、`&`、`-` 组成且长度 >= 3 的文本
    #[default]
    Pattern,
    /// 第一行非空文本
    FirstLine,
}
