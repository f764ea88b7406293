//! JSON documents read and written by the CLI.
//!
//! Coordinates are numbers (`3`, `0.25`) or strings holding a rational (`"1/3"`).
//! Rationals are exact under `--exact` and rounded to `f64` otherwise.

use anyhow::{anyhow, bail, Context, Result};
use num_rational::BigRational;
use num_traits::ToPrimitive;
use planekit::api::{Kernel, Point2};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Coord {
    Int(i64),
    Float(f64),
    Text(String),
}

pub type RawPoint = [Coord; 2];

/// Input of `validate`, output of `sample`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PartitionDoc {
    pub polygon: Vec<RawPoint>,
    pub partition: Vec<Vec<RawPoint>>,
}

/// Input of `intersect`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct IntersectDoc {
    pub segment: [RawPoint; 2],
    pub triangle: [RawPoint; 3],
}

/// Scalars the CLI can read from and write to a `Coord`.
pub trait CoordScalar: Sized {
    fn from_coord(c: &Coord) -> Result<Self>;
    fn to_coord(&self) -> Coord;
}

impl CoordScalar for f64 {
    fn from_coord(c: &Coord) -> Result<Self> {
        let x = match c {
            Coord::Int(i) => *i as f64,
            Coord::Float(f) => *f,
            Coord::Text(s) => match s.trim().parse::<f64>() {
                Ok(f) => f,
                Err(_) => BigRational::from_coord(c)?
                    .to_f64()
                    .ok_or_else(|| anyhow!("coordinate `{s}` does not fit in f64"))?,
            },
        };
        if !x.is_finite() {
            bail!("non-finite coordinate {x}");
        }
        Ok(x)
    }

    fn to_coord(&self) -> Coord {
        Coord::Float(*self)
    }
}

impl CoordScalar for BigRational {
    fn from_coord(c: &Coord) -> Result<Self> {
        match c {
            Coord::Int(i) => Ok(BigRational::from_integer((*i).into())),
            Coord::Float(f) => {
                BigRational::from_float(*f).ok_or_else(|| anyhow!("non-finite coordinate {f}"))
            }
            Coord::Text(s) => {
                let s = s.trim();
                if let Ok(q) = s.parse::<BigRational>() {
                    return Ok(q);
                }
                let f: f64 = s.parse().with_context(|| {
                    format!("coordinate `{s}` is neither a rational nor a float")
                })?;
                BigRational::from_float(f).ok_or_else(|| anyhow!("non-finite coordinate `{s}`"))
            }
        }
    }

    fn to_coord(&self) -> Coord {
        if self.is_integer() {
            if let Some(i) = self.numer().to_i64() {
                return Coord::Int(i);
            }
        }
        Coord::Text(self.to_string())
    }
}

pub fn point<K: Kernel>(raw: &RawPoint) -> Result<Point2<K::Num>>
where
    K::Num: CoordScalar,
{
    Ok(Point2::new(
        K::Num::from_coord(&raw[0])?,
        K::Num::from_coord(&raw[1])?,
    ))
}

pub fn points<K: Kernel>(raw: &[RawPoint]) -> Result<Vec<Point2<K::Num>>>
where
    K::Num: CoordScalar,
{
    raw.iter()
        .enumerate()
        .map(|(i, p)| point::<K>(p).with_context(|| format!("vertex {i}")))
        .collect()
}

pub fn raw_point<K: Kernel>(p: &Point2<K::Num>) -> RawPoint
where
    K::Num: CoordScalar,
{
    [p.x.to_coord(), p.y.to_coord()]
}
