use time::OffsetDateTime;
use time::macros::format_description;
use anyhow::Result;

pub fn format_date_time() -> Result<String> {
    let now = OffsetDateTime::now_local()?;
    let format = format_description!("[year]-[month]-[day] [hour]:[minute]:[second]");
    Ok(now.format(&format)?)
}

pub fn unix_millis() -> i64 {
    (OffsetDateTime::now_utc().unix_timestamp_nanos() / 1_000_000) as i64
}

/// 基于时间戳的 id；时钟没前进时在上一个 id 上加一，保证单调递增
pub fn next_timestamp_id(last: Option<i64>) -> i64 {
    let now = unix_millis();
    match last {
        Some(prev) if now <= prev => prev + 1,
        _ => now,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_strictly_increase() {
        let mut last = None;
        for _ in 0..100 {
            let id = next_timestamp_id(last);
            if let Some(prev) = last {
                assert!(id > prev);
            }
            last = Some(id);
        }
    }

    #[test]
    fn future_last_id_is_bumped() {
        let far = unix_millis() + 60_000;
        assert_eq!(next_timestamp_id(Some(far)), far + 1);
    }
}
