//--- Copyright (C) 2025 Saki Komikado <komietty@gmail.com>,
//--- This Source Code Form is subject to the terms of the Mozilla Public License v.2.0.

use nalgebra::RowVector3;

pub type Row3f = RowVector3<f64>;

/// Spherical form: `theta` is the azimuth from +x in the xy-plane,
/// `phi` the polar angle from +z.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Spherical {
    pub theta: f64,
    pub phi: f64,
    pub r: f64,
}

#[derive(Clone, Copy, Debug, PartialEq)]
enum Representation {
    Cartesian(Row3f),
    Spherical(Spherical),
    Both(Row3f, Spherical),
}

/// Point that keeps whichever of its two forms was last written and derives
/// the other on first read. Writing either form drops the cached other one.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Coord {
    repr: Representation,
}

impl Coord {
    pub fn cartesian(x: f64, y: f64, z: f64) -> Self {
        Self { repr: Representation::Cartesian(Row3f::new(x, y, z)) }
    }

    pub fn spherical(theta: f64, phi: f64, r: f64) -> Self {
        Self { repr: Representation::Spherical(Spherical { theta, phi, r }) }
    }

    pub fn set_cartesian(&mut self, p: Row3f) { self.repr = Representation::Cartesian(p); }
    pub fn set_spherical(&mut self, s: Spherical) { self.repr = Representation::Spherical(s); }

    pub fn is_cached(&self) -> bool { matches!(self.repr, Representation::Both(..)) }

    pub fn xyz(&mut self) -> Row3f {
        match self.repr {
            Representation::Cartesian(p) | Representation::Both(p, _) => p,
            Representation::Spherical(s) => {
                let p = to_cartesian(&s);
                self.repr = Representation::Both(p, s);
                p
            }
        }
    }

    pub fn sph(&mut self) -> Spherical {
        match self.repr {
            Representation::Spherical(s) | Representation::Both(_, s) => s,
            Representation::Cartesian(p) => {
                let s = to_spherical(&p);
                self.repr = Representation::Both(p, s);
                s
            }
        }
    }

    /// Cartesian form without touching the cache.
    pub fn to_xyz(&self) -> Row3f {
        match self.repr {
            Representation::Cartesian(p) | Representation::Both(p, _) => p,
            Representation::Spherical(s) => to_cartesian(&s),
        }
    }

    pub fn translated(&self, other: &Coord) -> Coord {
        Coord { repr: Representation::Cartesian(self.to_xyz() + other.to_xyz()) }
    }

    pub fn scale(&self, k: f64) -> Coord {
        Coord { repr: Representation::Cartesian(self.to_xyz() * k) }
    }
}

pub fn to_cartesian(s: &Spherical) -> Row3f {
    let (st, ct) = s.theta.sin_cos();
    let (sp, cp) = s.phi.sin_cos();
    Row3f::new(s.r * sp * ct, s.r * sp * st, s.r * cp)
}

pub fn to_spherical(p: &Row3f) -> Spherical {
    let r = p.norm();
    if r == 0. { return Spherical { theta: 0., phi: 0., r: 0. }; }
    Spherical {
        theta: p.y.atan2(p.x),
        phi: (p.z / r).clamp(-1., 1.).acos(),
        r,
    }
}
