use ring::rand::{SecureRandom, SystemRandom};
use crate::error::{AppError, AppResult};

/// 128 位随机数的十六进制表示，用作会话 id
pub fn random_token() -> AppResult<String> {
    let mut bytes = [0u8; 16];
    SystemRandom::new()
        .fill(&mut bytes)
        .map_err(|_| AppError::Config(anyhow::anyhow!("System random source unavailable")))?;
    Ok(hex::encode(bytes))
}
