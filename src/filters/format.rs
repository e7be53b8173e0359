// ============================================================================
// FORMAT - Filtros de presentación `percentage` y `round`
// ============================================================================
// Ambos filtros tratan un valor ausente, cero o NaN como 0, y unos decimales
// ausentes o 0 como 0. `Some(0)` y `None` para `decimals` son equivalentes.
// ============================================================================

use super::number::{js_number_string, js_round};

/// Valor "falsy" (ausente, 0 o NaN) -> 0
fn value_or_zero(value: Option<f64>) -> f64 {
    match value {
        Some(v) if v != 0.0 && !v.is_nan() => v,
        _ => 0.0,
    }
}

/// Decimales ausentes -> 0 (0 explícito cae en la misma rama)
fn decimals_or_zero(decimals: Option<u32>) -> u32 {
    decimals.unwrap_or(0)
}

/// Redondear `value` a `decimals` decimales escalando por 10^decimals
fn round_scaled(value: f64, decimals: u32) -> f64 {
    // Satura: 10^d ya es inf para d >= 309, igual que Math.pow
    let factor = 10f64.powi(i32::try_from(decimals).unwrap_or(i32::MAX));
    js_round(value * factor) / factor
}

/// Formatear como porcentaje: `0.1234, 2 -> "12.34%"`
pub fn percentage(value: Option<f64>, decimals: Option<u32>) -> String {
    let value = value_or_zero(value) * 100.0;
    let rounded = round_scaled(value, decimals_or_zero(decimals));
    format!("{}%", js_number_string(rounded))
}

/// Redondear a `decimals` decimales. Devuelve un número, no texto.
pub fn round(value: Option<f64>, decimals: Option<u32>) -> f64 {
    round_scaled(value_or_zero(value), decimals_or_zero(decimals))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_percentage_defaults() {
        assert_eq!(percentage(None, None), "0%");
        assert_eq!(percentage(Some(0.0), Some(2)), "0%");
        assert_eq!(percentage(Some(f64::NAN), None), "0%");
    }

    #[test]
    fn test_percentage_scaling() {
        assert_eq!(percentage(Some(0.5), Some(0)), "50%");
        assert_eq!(percentage(Some(0.1234), Some(2)), "12.34%");
        assert_eq!(percentage(Some(0.1234), None), "12%");
        assert_eq!(percentage(Some(0.12345), Some(1)), "12.3%");
        assert_eq!(percentage(Some(1.0), Some(3)), "100%");
    }

    #[test]
    fn test_percentage_negative() {
        assert_eq!(percentage(Some(-0.25), None), "-25%");
        // Empate negativo redondea hacia +∞: -0.5 -> -0 -> "0%"
        assert_eq!(percentage(Some(-0.005), None), "0%");
    }

    #[test]
    fn test_round_scaling_behaviour() {
        // 1.005 * 100 = 100.49999999999999 en f64
        assert_eq!(round(Some(1.005), Some(2)), 1.0);
        assert_eq!(round(Some(1.2345), Some(2)), 1.23);
        assert_eq!(round(Some(2.5), None), 3.0);
    }

    #[test]
    fn test_round_zero_decimals_same_as_missing() {
        assert_eq!(round(Some(5.0), Some(0)), round(Some(5.0), None));
        assert_eq!(round(Some(5.4), Some(0)), round(Some(5.4), None));
    }

    #[test]
    fn test_huge_decimals_give_nan() {
        // v * inf / inf
        assert!(round(Some(12.0), Some(u32::MAX)).is_nan());
        assert!(round(Some(12.0), Some(400)).is_nan());
        assert_eq!(percentage(Some(0.5), Some(u32::MAX)), "NaN%");
    }

    #[test]
    fn test_round_negative_zero() {
        assert!(round(Some(-0.4), None).is_sign_negative());
        assert_eq!(percentage(Some(-0.004), None), "0%");
    }

    #[test]
    fn test_round_defaults() {
        assert_eq!(round(None, None), 0.0);
        assert_eq!(round(None, Some(3)), 0.0);
        assert_eq!(round(Some(f64::NAN), Some(1)), 0.0);
    }
}
