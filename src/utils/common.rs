use std::time::Duration;

// 把运行时长转换成易读的文字，取最大的非零单位
pub fn humanize_elapsed(elapsed: Duration) -> String {
    match elapsed {
        d if d.as_secs() > 0 => format!("{:.2} 秒", d.as_secs_f64()),
        d if d.as_millis() > 0 => format!("{} 毫秒", d.as_millis()),
        d if d.as_micros() > 0 => format!("{} 微秒", d.as_micros()),
        d => format!("{} 纳秒", d.as_nanos()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn picks_largest_unit() {
        assert_eq!(humanize_elapsed(Duration::from_millis(1500)), "1.50 秒");
        assert_eq!(humanize_elapsed(Duration::from_millis(42)), "42 毫秒");
        assert_eq!(humanize_elapsed(Duration::from_micros(7)), "7 微秒");
        assert_eq!(humanize_elapsed(Duration::from_nanos(3)), "3 纳秒");
    }
}
