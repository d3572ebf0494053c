//! Normalisierung der Bogen-Argumente von Turtle und Lineal.
//!
//! Radius: Skalar (Kreis) oder `[rx, ry]`. Winkel: Skalar (Endwinkel, Start 0)
//! oder `[start, end]`. Listen mit weniger als 2 Elementen sind ein Fehler.

use anyhow::{bail, Result};

/// Skalar- oder Listen-Argument.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ArcArg<'a> {
    Scalar(f64),
    List(&'a [f64]),
}

impl From<f64> for ArcArg<'_> {
    fn from(v: f64) -> Self {
        Self::Scalar(v)
    }
}

impl<'a> From<&'a [f64]> for ArcArg<'a> {
    fn from(v: &'a [f64]) -> Self {
        Self::List(v)
    }
}

impl<'a, const N: usize> From<&'a [f64; N]> for ArcArg<'a> {
    fn from(v: &'a [f64; N]) -> Self {
        Self::List(v.as_slice())
    }
}

/// Normalisierte Bogen-Parameter (Radien bereits mit `step` skaliert, Winkel in Grad).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArcParams {
    pub rx: f64,
    pub ry: f64,
    pub start_deg: f64,
    pub end_deg: f64,
}

/// Zerlegt Radius- und Winkel-Argument und skaliert die Radien mit `step`.
pub fn arrange_arc_params(radius: ArcArg<'_>, degree: ArcArg<'_>, step: f64) -> Result<ArcParams> {
    if !step.is_finite() {
        bail!("Schrittweite muss endlich sein (erhalten: {})", step);
    }
    let (rx, ry) = match radius {
        ArcArg::Scalar(r) => (r, r),
        ArcArg::List(&[rx, ry, ..]) => (rx, ry),
        ArcArg::List(list) => {
            bail!("Radius-Liste braucht 2 Elemente (erhalten: {})", list.len())
        }
    };
    let (start_deg, end_deg) = match degree {
        ArcArg::Scalar(d) => (0.0, d),
        ArcArg::List(&[start, end, ..]) => (start, end),
        ArcArg::List(list) => {
            bail!("Winkel-Liste braucht 2 Elemente (erhalten: {})", list.len())
        }
    };
    Ok(ArcParams {
        rx: rx * step,
        ry: ry * step,
        start_deg,
        end_deg,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_scalar_forms() {
        let p = arrange_arc_params(ArcArg::Scalar(10.0), ArcArg::Scalar(90.0), 1.0)
            .expect("gültige Argumente");
        assert_eq!(
            p,
            ArcParams {
                rx: 10.0,
                ry: 10.0,
                start_deg: 0.0,
                end_deg: 90.0
            }
        );
    }

    #[test]
    fn test_list_forms_and_step_scale() {
        let p = arrange_arc_params(ArcArg::from(&[10.0, 20.0]), ArcArg::from(&[30.0, -60.0]), 2.5)
            .expect("gültige Argumente");
        assert_relative_eq!(p.rx, 25.0);
        assert_relative_eq!(p.ry, 50.0);
        assert_relative_eq!(p.start_deg, 30.0);
        assert_relative_eq!(p.end_deg, -60.0);
    }

    #[test]
    fn test_extra_elements_ignored() {
        let radius = [1.0, 2.0, 3.0];
        let p = arrange_arc_params(ArcArg::List(&radius), ArcArg::Scalar(45.0), 1.0)
            .expect("gültige Argumente");
        assert_relative_eq!(p.ry, 2.0);
    }

    #[test]
    fn test_short_radius_list_fails() {
        let err = arrange_arc_params(ArcArg::List(&[10.0]), ArcArg::Scalar(90.0), 1.0)
            .expect_err("Liste mit 1 Element muss scheitern");
        assert!(err.to_string().contains("Radius"));
    }

    #[test]
    fn test_short_degree_list_fails() {
        let empty: &[f64] = &[];
        let err = arrange_arc_params(ArcArg::Scalar(10.0), empty.into(), 1.0)
            .expect_err("leere Liste muss scheitern");
        assert!(err.to_string().contains("Winkel"));
    }

    #[test]
    fn test_non_finite_step_fails() {
        assert!(arrange_arc_params(ArcArg::Scalar(10.0), ArcArg::Scalar(90.0), f64::NAN).is_err());
    }
}
