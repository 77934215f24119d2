//! 小票字段抽取用的正则表达式

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // 店名: 大写字母、内部空格、& 和 -，至少含一个字母 (长度由调用方检查)
    pub static ref STORE_NAME: Regex = Regex::new(
        r"^[A-Z &\-]*[A-Z][A-Z &\-]*$"
    ).unwrap();

    // 日期: D/M/YY(YY) 或 YYYY/M/D，分隔符为 / - 或空格
    pub static ref DATE: Regex = Regex::new(
        r"\b(?:[0-9]{1,2}[/\- ][0-9]{1,2}[/\- ][0-9]{2}(?:[0-9]{2})?|[0-9]{4}[/\- ][0-9]{1,2}[/\- ][0-9]{1,2})\b"
    ).unwrap();

    // 合计; 第 1 组命中 "sub" 时属于小计，由调用方跳过
    pub static ref TOTAL: Regex = Regex::new(
        r"(?i)\b(sub[ \t\-]*)?(?:grand[ \t]+)?total(?:[ \t]+amount)?[\s:\-]*(?:[$€£]|RM)?\s*([0-9]+(?:,[0-9]{3})*\.[0-9]{2})\b"
    ).unwrap();

    pub static ref SUBTOTAL: Regex = Regex::new(
        r"(?i)\bsub[ \t\-]*total[\s:\-]*(?:[$€£]|RM)?\s*([0-9]+(?:,[0-9]{3})*\.[0-9]{2})\b"
    ).unwrap();

    pub static ref TAX: Regex = Regex::new(
        r"(?i)\b(?:tax|gst|vat)[\s:\-]*(?:[$€£]|RM)?\s*([0-9]+(?:,[0-9]{3})*\.[0-9]{2})\b"
    ).unwrap();

    // 明细行: 品名 [数量] [币种]价格，价格必须位于行尾
    pub static ref LINE_ITEM: Regex = Regex::new(
        r"^([A-Za-z0-9][A-Za-z0-9 &\-]*?)[ \t]+(?:([1-9][0-9]{0,5})[ \t]+)?(?:[$€£]|RM)?[ \t]*([0-9]+(?:,[0-9]{3})*\.[0-9]{2})$"
    ).unwrap();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn store_name_shape() {
        assert!(STORE_NAME.is_match("ACME MART"));
        assert!(STORE_NAME.is_match("B&Q"));
        assert!(STORE_NAME.is_match("SEVEN-ELEVEN"));
        assert!(!STORE_NAME.is_match("----------"));
        assert!(!STORE_NAME.is_match("& - &"));
        assert!(!STORE_NAME.is_match("Acme Mart"));
        assert!(!STORE_NAME.is_match("TOTAL 6.00"));
    }

    #[test]
    fn date_alternatives() {
        assert_eq!(DATE.find("on 1/2/24 ok").unwrap().as_str(), "1/2/24");
        assert_eq!(DATE.find("01-02-2024").unwrap().as_str(), "01-02-2024");
        assert_eq!(DATE.find("2024-01-02").unwrap().as_str(), "2024-01-02");
        assert_eq!(DATE.find("2024/1/2").unwrap().as_str(), "2024/1/2");
        assert!(DATE.find("MILK 2 3.50").is_none());
        assert!(DATE.find("1/2/245").is_none());
    }

    #[test]
    fn tax_keywords() {
        for line in ["TAX: 0.50", "gst 0.50", "VAT - $0.50", "Sales Tax RM 0.50"] {
            let caps = TAX.captures(line).unwrap();
            assert_eq!(&caps[1], "0.50", "{line}");
        }
        assert!(TAX.captures("TAX: 0.5").is_none());
        assert!(TAX.captures("TAXI 0.50").is_none());
    }

    #[test]
    fn total_flags_subtotal_prefix() {
        let caps = TOTAL.captures("SUBTOTAL: 5.50").unwrap();
        assert!(caps.get(1).is_some());
        let caps = TOTAL.captures("SUB-TOTAL: 5.50").unwrap();
        assert!(caps.get(1).is_some());
        let caps = TOTAL.captures("Grand Total: 7.25").unwrap();
        assert!(caps.get(1).is_none());
        assert_eq!(&caps[2], "7.25");
    }

    #[test]
    fn amount_may_follow_on_next_line() {
        assert_eq!(&TOTAL.captures("TOTAL\n6.00").unwrap()[2], "6.00");
        assert_eq!(&SUBTOTAL.captures("Sub-Total:\r\n$5.50").unwrap()[1], "5.50");
        assert_eq!(&TAX.captures("GST\n0.50").unwrap()[1], "0.50");
    }

    #[test]
    fn only_ascii_digits() {
        assert!(TAX.captures("TAX ０.５０").is_none());
        assert!(DATE.find("０１/０２/２４").is_none());
        assert!(LINE_ITEM.captures("MILK ２ 3.50").is_none());
    }

    #[test]
    fn line_item_groups() {
        let caps = LINE_ITEM.captures("MILK 2 3.50").unwrap();
        assert_eq!(&caps[1], "MILK");
        assert_eq!(&caps[2], "2");
        assert_eq!(&caps[3], "3.50");

        let caps = LINE_ITEM.captures("BREAD 2.00").unwrap();
        assert_eq!(&caps[1], "BREAD");
        assert!(caps.get(2).is_none());

        assert!(LINE_ITEM.captures("MILK 2 3.5").is_none());
        assert!(LINE_ITEM.captures("SUBTOTAL: 5.50").is_none());
    }
}
