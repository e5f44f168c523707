//! Dataset vocabulary shared by every shaping function.
//!
//! The source tables ship with Spanish column headers and sentinel category
//! values; they are consumed verbatim by name, so they live here exactly
//! once.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Country name column.
pub const COUNTRY: &str = "País";
/// Survey year column (stored as text/mixed in the source files).
pub const YEAR: &str = "Años";
/// Observation value column.
pub const VALUE: &str = "valor";
/// Geographic area dimension (Urbana / Rural / Nacional).
pub const AREA: &str = "Área geográfica";
/// Income quintile dimension.
pub const QUINTILE: &str = "Quintil";
/// Sex dimension.
pub const SEX: &str = "Sexo";
/// Education level dimension.
pub const EDUCATION: &str = "Escolaridad (EH)";
/// Age group dimension of the economic participation table.
pub const AGE_GROUP: &str = "Grupo edad para participación en la PEA";
/// Basic services availability dimension.
pub const SERVICES: &str = "Servicios básicos_(EH)";
/// Low-productivity employment dimension.
pub const LOW_PRODUCTIVITY: &str = "Ocupados baja productividad";

/// Aggregate row over all areas.
pub const AREA_NATIONAL: &str = "Nacional";
pub const AREA_URBAN: &str = "Urbana";
pub const AREA_RURAL: &str = "Rural";
/// Aggregate row over all quintiles.
pub const ALL_QUINTILES: &str = "Total quintiles";
/// Aggregate row over both sexes.
pub const BOTH_SEXES: &str = "Ambos sexos";
pub const SEX_MEN: &str = "Hombres";
pub const SEX_WOMEN: &str = "Mujeres";
/// Aggregate row of the education dimension.
pub const EDUCATION_TOTAL: &str = "Total";
/// Aggregate row of the low-productivity dimension.
pub const LOW_PRODUCTIVITY_TOTAL: &str = "Total ocupados baja productividad";

/// The fixed year set of the grouped-by-year bar charts. Datasets lacking a
/// year yield a shorter series for it.
pub const REFERENCE_YEARS: [i32; 5] = [2002, 2005, 2010, 2014, 2019];

/// The demographic breakdown a user can pick for trend and grouped charts.
///
/// Picking one dimension as the series axis holds the other at its
/// aggregate sentinel, so the slice stays one observation per
/// (category, year).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Breakdown {
    /// Series per geographic area; quintile held at "Total quintiles".
    Area,
    /// Series per quintile; area held at "Nacional".
    Quintile,
}

impl Breakdown {
    /// Column whose category values become the series of the chart.
    pub fn series_column(&self) -> &'static str {
        match self {
            Breakdown::Area => AREA,
            Breakdown::Quintile => QUINTILE,
        }
    }

    /// The (column, sentinel) pair held fixed while this breakdown varies.
    pub fn hold(&self) -> (&'static str, &'static str) {
        match self {
            Breakdown::Area => (QUINTILE, ALL_QUINTILES),
            Breakdown::Quintile => (AREA, AREA_NATIONAL),
        }
    }
}

impl fmt::Display for Breakdown {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Breakdown::Area => write!(f, "{AREA}"),
            Breakdown::Quintile => write!(f, "{QUINTILE}"),
        }
    }
}

impl FromStr for Breakdown {
    type Err = crate::SivError;

    /// Accepts the short CLI keys and the verbatim dropdown labels.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "area" => Ok(Breakdown::Area),
            "quintil" | "quintile" => Ok(Breakdown::Quintile),
            _ if s == AREA => Ok(Breakdown::Area),
            _ if s == QUINTILE => Ok(Breakdown::Quintile),
            other => Err(crate::SivError::UnknownCategory {
                column: "desagregación".into(),
                value: other.into(),
            }),
        }
    }
}
