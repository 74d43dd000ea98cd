/// Integer that is displayed with `'` between groups of three digits.
pub struct NiceInt(i128);

impl NiceInt {
    pub fn from(value: impl Into<i128>) -> Self {
        Self(value.into())
    }

    pub fn from_usize(value: usize) -> Self {
        Self(value as i128)
    }

    pub fn from_f64(value: f64) -> Self {
        Self(value as i128)
    }
}

impl std::fmt::Display for NiceInt {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let digits = self.0.unsigned_abs().to_string();
        if self.0 < 0 {
            write!(f, "-")?;
        }
        for (i, c) in digits.chars().enumerate() {
            if i != 0 && (digits.len() - i) % 3 == 0 {
                write!(f, "'")?;
            }
            write!(f, "{}", c)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::NiceInt;

    #[test]
    fn test_delimiters() {
        assert_eq!(NiceInt::from(0).to_string(), "0");
        assert_eq!(NiceInt::from(999).to_string(), "999");
        assert_eq!(NiceInt::from(1000).to_string(), "1'000");
        assert_eq!(NiceInt::from_usize(1_234_567).to_string(), "1'234'567");
        assert_eq!(NiceInt::from(-12_345).to_string(), "-12'345");
        assert_eq!(NiceInt::from_f64(2.5e6).to_string(), "2'500'000");
    }
}
