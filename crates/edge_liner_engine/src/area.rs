//! Bounding-Box und Fernpunkt-Tracker eines Strichs.
//!
//! Gehört der aufrufenden Pfad-Sitzung (ein Pen-Down-Strich) und wird in jeden
//! Liner-Aufruf dieses Strichs per `&mut` durchgereicht. Der Liner setzt ihn
//! nie zurück; das übernimmt ausschließlich der Besitzer.

use glam::DVec2;

/// Akkumuliert Bounding-Box und den vom Startpunkt am weitesten entfernten Punkt.
///
/// Wird von Verlaufsfüllungen als Box und als kanonischer Start→Fernpunkt-Vektor genutzt.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AreaAccumulator {
    /// Startpunkt (Pen-Down), beim ersten `fold` fixiert
    from: Option<DVec2>,
    /// Bisher am weitesten von `from` entfernter Punkt
    to: DVec2,
    left: f64,
    top: f64,
    right: f64,
    bottom: f64,
    squared_farthest_dist: f64,
}

impl AreaAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Nimmt einen Punkt auf: erweitert die Box und aktualisiert den Fernpunkt.
    ///
    /// Der erste Punkt fixiert den Startpunkt.
    pub fn fold(&mut self, p: DVec2) {
        let Some(from) = self.from else {
            self.from = Some(p);
            self.to = p;
            self.left = p.x;
            self.right = p.x;
            self.top = p.y;
            self.bottom = p.y;
            self.squared_farthest_dist = 0.0;
            return;
        };
        self.left = self.left.min(p.x);
        self.right = self.right.max(p.x);
        self.top = self.top.min(p.y);
        self.bottom = self.bottom.max(p.y);

        let d2 = from.distance_squared(p);
        if d2 > self.squared_farthest_dist {
            self.squared_farthest_dist = d2;
            self.to = p;
        }
    }

    /// Verwirft alle Daten (nur durch den Besitzer, z.B. bei neuem Pen-Down).
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn is_empty(&self) -> bool {
        self.from.is_none()
    }

    pub fn from_point(&self) -> Option<DVec2> {
        self.from
    }

    /// Fernpunkt; `None` solange nichts aufgenommen wurde.
    pub fn to_point(&self) -> Option<DVec2> {
        self.from.map(|_| self.to)
    }

    /// Bounding-Box als (links-oben, rechts-unten).
    pub fn bounds(&self) -> Option<(DVec2, DVec2)> {
        self.from.map(|_| {
            (
                DVec2::new(self.left, self.top),
                DVec2::new(self.right, self.bottom),
            )
        })
    }

    pub fn squared_farthest_dist(&self) -> f64 {
        self.squared_farthest_dist
    }
}
