//! 校验工具
//!
//! 各控制器共用的输入校验函数。校验按 必填 → 枚举 → 数值范围 → 格式 的
//! 顺序在控制器内逐项执行，任何一项失败立即短路返回。

use chrono::NaiveDate;
use lazy_static::lazy_static;
use serde::Serialize;
use validator::ValidationError;

use crate::utils::errors::{AppError, AppResult};

lazy_static! {
    /// 手机号：1 开头的 11 位数字
    static ref PHONE_RE: regex::Regex = regex::Regex::new(r"^1\d{10}$").unwrap();
    /// 车牌号：省份简称 + 发牌机关字母 + 序号
    static ref PLATE_RE: regex::Regex = regex::Regex::new(
        "^[京津沪渝冀豫云辽黑湘皖鲁新苏浙赣鄂桂甘晋蒙陕吉闽贵粤青藏川宁琼使领]\
         [A-HJ-NP-Z][A-HJ-NP-Z0-9]{4,5}[A-HJ-NP-Z0-9挂学警港澳]$"
    )
    .unwrap();
}

/// 取必填字段，缺失或空串返回带指定提示的校验错误
pub fn required_str<'a>(value: &'a Option<String>, message: &str) -> AppResult<&'a str> {
    match value.as_deref() {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(AppError::Validation(message.to_string())),
    }
}

/// 取必填数值字段
pub fn required_f64(value: Option<f64>, message: &str) -> AppResult<f64> {
    value.ok_or_else(|| AppError::Validation(message.to_string()))
}

/// 校验手机号格式
pub fn validate_phone(value: &str) -> Result<(), ValidationError> {
    if !PHONE_RE.is_match(value) {
        let mut error = ValidationError::new("phone");
        error.add_param("value".into(), &value.to_string());
        return Err(error);
    }
    Ok(())
}

/// 校验车牌号格式
pub fn validate_license_plate(value: &str) -> Result<(), ValidationError> {
    if !PLATE_RE.is_match(value) {
        let mut error = ValidationError::new("license_plate");
        error.add_param("value".into(), &value.to_string());
        return Err(error);
    }
    Ok(())
}

/// 校验取值在允许列表内
pub fn validate_enum(value: &str, allowed_values: &[&str]) -> Result<(), ValidationError> {
    if !allowed_values.contains(&value) {
        let mut error = ValidationError::new("enum");
        error.add_param("value".into(), &value.to_string());
        error.add_param("allowed_values".into(), &format!("{:?}", allowed_values));
        return Err(error);
    }
    Ok(())
}

/// 校验并转换日期字符串（YYYY-MM-DD）
pub fn validate_date(value: &str) -> Result<NaiveDate, ValidationError> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").map_err(|_| {
        let mut error = ValidationError::new("date");
        error.add_param("value".into(), &value.to_string());
        error.add_param("format".into(), &"YYYY-MM-DD".to_string());
        error
    })
}

/// 校验数值为正
pub fn validate_positive<T: PartialOrd + std::fmt::Display + num_traits::Zero + Serialize>(
    value: T,
) -> Result<(), ValidationError> {
    if value <= T::zero() {
        let mut error = ValidationError::new("positive");
        error.add_param("value".into(), &value);
        return Err(error);
    }
    Ok(())
}

/// 校验数值非负
pub fn validate_non_negative<T: PartialOrd + std::fmt::Display + num_traits::Zero + Serialize>(
    value: T,
) -> Result<(), ValidationError> {
    if value < T::zero() {
        let mut error = ValidationError::new("non_negative");
        error.add_param("value".into(), &value);
        return Err(error);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_phone() {
        assert!(validate_phone("13800000000").is_ok());
        assert!(validate_phone("12345").is_err());
        assert!(validate_phone("23800000000").is_err());
        assert!(validate_phone("138000000001").is_err());
    }

    #[test]
    fn test_validate_license_plate() {
        assert!(validate_license_plate("京A12345").is_ok());
        assert!(validate_license_plate("沪B2345挂").is_ok());
        // 长度不足
        assert!(validate_license_plate("京A123").is_err());
        // 非省份简称开头
        assert!(validate_license_plate("XA12345").is_err());
        // 发牌机关不允许字母 I/O
        assert!(validate_license_plate("京I12345").is_err());
    }

    #[test]
    fn test_validate_enum() {
        assert!(validate_enum("A", &["A", "B", "C"]).is_ok());
        assert!(validate_enum("D", &["A", "B", "C"]).is_err());
        assert!(validate_enum("运输中异常", &["运输中异常", "空闲时异常"]).is_ok());
    }

    #[test]
    fn test_validate_date() {
        assert_eq!(
            validate_date("2025-12-01").unwrap(),
            NaiveDate::from_ymd_opt(2025, 12, 1).unwrap()
        );
        assert!(validate_date("2025/12/01").is_err());
        assert!(validate_date("2025-13-01").is_err());
    }

    #[test]
    fn test_validate_positive() {
        assert!(validate_positive(3.5).is_ok());
        assert!(validate_positive(0.0).is_err());
        assert!(validate_positive(-1.0).is_err());
    }

    #[test]
    fn test_validate_non_negative() {
        assert!(validate_non_negative(0.0).is_ok());
        assert!(validate_non_negative(200.0).is_ok());
        assert!(validate_non_negative(-0.5).is_err());
    }

    #[test]
    fn test_required_str() {
        assert_eq!(required_str(&Some("D001".to_string()), "缺失").unwrap(), "D001");
        assert!(required_str(&Some(String::new()), "缺失").is_err());
        assert!(required_str(&None, "缺失").is_err());
    }
}
