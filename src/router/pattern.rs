// ============================================================================
// ROUTE PATTERN - Patrones de ruta tipo "/", "/:model"
// ============================================================================

use std::collections::BTreeMap;
use std::fmt;

use percent_encoding::percent_decode_str;

/// Segmento de un patrón
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    /// Texto literal (comparación ASCII sin mayúsculas)
    Static(String),
    /// Parámetro con nombre (`:model`), captura un segmento no vacío
    Param(String),
}

/// Patrón de ruta ya parseado
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoutePattern {
    raw: String,
    segments: Vec<Segment>,
}

impl RoutePattern {
    /// Parsear un patrón. Debe empezar por `/`.
    pub fn parse(pattern: &str) -> Result<Self, String> {
        if !pattern.starts_with('/') {
            return Err(format!("El patrón '{}' debe empezar por '/'", pattern));
        }

        let mut segments = Vec::new();
        for part in split_segments(pattern) {
            if let Some(name) = part.strip_prefix(':') {
                if name.is_empty() {
                    return Err(format!("Parámetro sin nombre en '{}'", pattern));
                }
                if segments.iter().any(|s| matches!(s, Segment::Param(n) if n == name)) {
                    return Err(format!("Parámetro '{}' duplicado en '{}'", name, pattern));
                }
                segments.push(Segment::Param(name.to_string()));
            } else {
                segments.push(Segment::Static(part.to_string()));
            }
        }

        Ok(Self {
            raw: pattern.to_string(),
            segments,
        })
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Comparar contra un path ya normalizado (sin query ni fragmento).
    /// Devuelve los parámetros capturados si coincide.
    pub fn matches(&self, path: &str) -> Option<BTreeMap<String, String>> {
        let parts = split_segments(path);
        if parts.len() != self.segments.len() {
            return None;
        }

        let mut params = BTreeMap::new();
        for (segment, part) in self.segments.iter().zip(parts) {
            match segment {
                Segment::Static(text) => {
                    if !text.eq_ignore_ascii_case(part) {
                        return None;
                    }
                }
                Segment::Param(name) => {
                    params.insert(name.clone(), decode_param(part));
                }
            }
        }
        Some(params)
    }
}

impl fmt::Display for RoutePattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

/// Segmentos de un path: "/" -> [], "/a/" -> ["a"]. Los vacíos intermedios se conservan
/// para que "/a//b" no coincida con "/:x/:y".
fn split_segments(path: &str) -> Vec<&str> {
    let trimmed = path.strip_prefix('/').unwrap_or(path);
    let trimmed = trimmed.strip_suffix('/').unwrap_or(trimmed);
    if trimmed.is_empty() {
        Vec::new()
    } else {
        trimmed.split('/').collect()
    }
}

/// Decodificar %XX. Si no es UTF-8 válido se deja el valor original.
fn decode_param(raw: &str) -> String {
    match percent_decode_str(raw).decode_utf8() {
        Ok(decoded) => decoded.into_owned(),
        Err(_) => raw.to_string(),
    }
}
