//! Versioned save records for deposit fields.
//!
//! A [`FieldRecord`] captures everything needed to rebuild a [`DepositField`] after a
//! restart, including the remaining amount of each deposit. Records are plain serde
//! structs; JSON helpers are provided for the common case.
use std::io::{Read, Write};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::deposit::Deposit;
use crate::error::{Error, Result};
use crate::field::DepositField;
use crate::geometry::{Point2, Polygon};

/// Current record layout version.
pub const FORMAT_VERSION: u32 = 1;

/// Saved state of one deposit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DepositRecord {
    pub center: Point2,
    pub radius: f64,
    pub depth: f64,
    pub initial_amount: f64,
    pub remaining_amount: f64,
    /// Outline vertices in generation order.
    pub vertices: Vec<Point2>,
}

/// Saved state of a whole field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldRecord {
    pub version: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
    pub width: f64,
    pub height: f64,
    pub deposits: Vec<DepositRecord>,
}

impl From<&Deposit> for DepositRecord {
    fn from(d: &Deposit) -> Self {
        Self {
            center: d.center(),
            radius: d.radius(),
            depth: d.depth(),
            initial_amount: d.initial_amount(),
            remaining_amount: d.remaining_amount(),
            vertices: d.vertices().to_vec(),
        }
    }
}

impl TryFrom<DepositRecord> for Deposit {
    type Error = Error;

    fn try_from(r: DepositRecord) -> Result<Self> {
        if !r.initial_amount.is_finite() || r.initial_amount < 0.0 {
            return Err(Error::InvalidRecord(format!(
                "initial amount {} must be finite and >= 0",
                r.initial_amount
            )));
        }
        if !(0.0..=r.initial_amount).contains(&r.remaining_amount) {
            return Err(Error::InvalidRecord(format!(
                "remaining amount {} outside [0, {}]",
                r.remaining_amount, r.initial_amount
            )));
        }
        if !r.radius.is_finite() || r.radius <= 0.0 {
            return Err(Error::InvalidRecord(format!(
                "radius {} must be finite and > 0",
                r.radius
            )));
        }
        if !r.depth.is_finite() {
            return Err(Error::InvalidRecord(format!(
                "depth {} must be finite",
                r.depth
            )));
        }
        if !is_finite_point(r.center) {
            return Err(Error::InvalidRecord(format!(
                "center ({}, {}) must be finite",
                r.center.x, r.center.y
            )));
        }
        if let Some(i) = r.vertices.iter().position(|v| !is_finite_point(*v)) {
            return Err(Error::InvalidRecord(format!(
                "outline vertex {i} ({}, {}) must be finite",
                r.vertices[i].x, r.vertices[i].y
            )));
        }
        let shape = Polygon::from_vec(r.vertices)
            .map_err(|e| Error::InvalidRecord(format!("deposit outline: {e}")))?;
        Ok(Deposit::from_parts(
            r.center,
            r.radius,
            r.depth,
            r.initial_amount,
            r.remaining_amount,
            shape,
        ))
    }
}

fn is_finite_point(p: Point2) -> bool {
    p.x.is_finite() && p.y.is_finite()
}

impl DepositField {
    /// Snapshot the field, including current remaining amounts.
    pub fn to_record(&self) -> FieldRecord {
        FieldRecord {
            version: FORMAT_VERSION,
            body: self.body().map(str::to_owned),
            width: self.width(),
            height: self.height(),
            deposits: self.iter().map(DepositRecord::from).collect(),
        }
    }

    /// Rebuild a field from a record, validating its version and invariants.
    pub fn from_record(record: FieldRecord) -> Result<Self> {
        if record.version != FORMAT_VERSION {
            return Err(Error::UnsupportedVersion {
                found: record.version,
                expected: FORMAT_VERSION,
            });
        }
        if !(record.width.is_finite() && record.width > 0.0)
            || !(record.height.is_finite() && record.height > 0.0)
        {
            return Err(Error::InvalidRecord(format!(
                "surface extent {} x {} must be finite and > 0",
                record.width, record.height
            )));
        }

        let deposits = record
            .deposits
            .into_iter()
            .enumerate()
            .map(|(i, r)| {
                Deposit::try_from(r).map_err(|e| match e {
                    Error::InvalidRecord(msg) => {
                        Error::InvalidRecord(format!("deposit {i}: {msg}"))
                    }
                    other => other,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        debug!(
            "Loaded {} deposits for '{}'.",
            deposits.len(),
            record.body.as_deref().unwrap_or("<unnamed>")
        );
        Ok(DepositField::from_parts(
            record.width,
            record.height,
            record.body,
            deposits,
        ))
    }

    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string(&self.to_record())?)
    }

    pub fn to_json_string_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.to_record())?)
    }

    pub fn from_json_str(s: &str) -> Result<Self> {
        Self::from_record(serde_json::from_str(s)?)
    }

    /// Write the record as JSON to `writer`.
    pub fn write_json<W: Write>(&self, mut writer: W) -> Result<()> {
        serde_json::to_writer(&mut writer, &self.to_record())?;
        writer.flush()?;
        Ok(())
    }

    /// Read a JSON record from `reader`.
    pub fn read_json<R: Read>(reader: R) -> Result<Self> {
        Self::from_record(serde_json::from_reader(reader)?)
    }
}
