// ============================================================================
// NUMBER - Redondeo y conversión a texto con semántica de JavaScript
// ============================================================================

/// Redondeo al entero más cercano, empates hacia +∞ (igual que `Math.round`).
///
/// `2.5 -> 3`, `-2.5 -> -2`, `-0.4 -> -0`. NaN e infinitos se devuelven tal cual.
pub fn js_round(x: f64) -> f64 {
    if !x.is_finite() {
        return x;
    }
    let floor = x.floor();
    let rounded = if x - floor >= 0.5 { floor + 1.0 } else { floor };
    // Un cero conserva el signo de x: Math.round(-0.4) es -0
    if rounded == 0.0 {
        0.0f64.copysign(x)
    } else {
        rounded
    }
}

/// Convertir un número a texto como lo hace `Number.prototype.toString()`.
pub fn js_number_string(x: f64) -> String {
    if x.is_nan() {
        return "NaN".to_string();
    }
    if x.is_infinite() {
        return if x > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if x == 0.0 {
        // Incluye -0
        return "0".to_string();
    }

    let abs = x.abs();
    if (1e-6..1e21).contains(&abs) {
        // Display de f64 ya usa la representación más corta sin exponente
        return format!("{}", x);
    }

    // Notación exponencial: "1e21" -> "1e+21", "1.5e-7" se queda igual
    let exp = format!("{:e}", x);
    match exp.split_once('e') {
        Some((mantissa, power)) if !power.starts_with('-') => format!("{}e+{}", mantissa, power),
        _ => exp,
    }
}
