//! 响应格式化工具

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

/// 准时率：一位小数加百分号，无已签收运单时为 "0%"
pub fn format_on_time_rate(on_time: i64, delivered: i64) -> String {
    if delivered > 0 {
        format!("{:.1}%", on_time as f64 / delivered as f64 * 100.0)
    } else {
        "0%".to_string()
    }
}

/// 平均送达时长：一位小数加"小时"，无数据时为 "0小时"
pub fn format_delivery_hours(avg_hours: Option<Decimal>) -> String {
    match avg_hours.and_then(|d| d.to_f64()) {
        Some(hours) => format!("{:.1}小时", hours),
        None => "0小时".to_string(),
    }
}

/// 可用载重占最大载重的百分比，一位小数
pub fn available_load_percent(max_load: Decimal, available_load: Decimal) -> String {
    let max = max_load.to_f64().unwrap_or(0.0);
    if max > 0.0 {
        let available = available_load.to_f64().unwrap_or(0.0);
        format!("{:.1}", available / max * 100.0)
    } else {
        "0.0".to_string()
    }
}

/// 绩效得分，一位小数
pub fn format_score(score: Option<Decimal>) -> String {
    format!("{:.1}", score.and_then(|d| d.to_f64()).unwrap_or(0.0))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_on_time_rate() {
        // 3 小时送达计入准时，5 小时不计入，由 SQL 侧筛选；这里验证比率计算
        assert_eq!(format_on_time_rate(1, 2), "50.0%");
        assert_eq!(format_on_time_rate(1, 3), "33.3%");
        assert_eq!(format_on_time_rate(2, 2), "100.0%");
        // 无已签收运单
        assert_eq!(format_on_time_rate(0, 0), "0%");
    }

    #[test]
    fn test_format_delivery_hours() {
        assert_eq!(format_delivery_hours(Some(Decimal::new(35, 1))), "3.5小时");
        assert_eq!(format_delivery_hours(None), "0小时");
    }

    #[test]
    fn test_available_load_percent() {
        assert_eq!(
            available_load_percent(Decimal::new(100, 0), Decimal::new(75, 0)),
            "75.0"
        );
        assert_eq!(
            available_load_percent(Decimal::new(30, 1), Decimal::new(10, 1)),
            "33.3"
        );
        assert_eq!(
            available_load_percent(Decimal::ZERO, Decimal::ZERO),
            "0.0"
        );
    }

    #[test]
    fn test_format_score() {
        assert_eq!(format_score(Some(Decimal::new(983, 1))), "98.3");
        assert_eq!(format_score(None), "0.0");
    }
}
