//! The catalog of known indicator datasets.
//!
//! Each indicator names its CSV source, its display title, whether its
//! values live on a percent scale, and the columns a conforming table must
//! carry.

use siv_core::schema::{
    AGE_GROUP, AREA, COUNTRY, EDUCATION, LOW_PRODUCTIVITY, QUINTILE, SERVICES, SEX, VALUE, YEAR,
};

/// The indicator datasets the dashboard knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Indicator {
    /// Mean household size.
    HouseholdSize,
    /// Women dedicated exclusively to home labor.
    WomenHomeLabor,
    /// Economic participation rate by age group.
    EconomicParticipation,
    /// Mean income ratio between sexes.
    IncomeRatioBySex,
    /// Urban workers in low-productivity (informal) sectors.
    InformalEmployment,
    /// Gini coefficient.
    Gini,
    /// Adult population by education level.
    AdultEducation,
    /// Households by availability of basic services.
    BasicServices,
    /// Victimization rate.
    Victimization,
    /// Mean per-capita household income ratio, quintile 5 over quintile 1.
    QuintileRatio,
}

impl Indicator {
    /// All known indicators, in dashboard page order.
    pub const ALL: &'static [Indicator] = &[
        Indicator::HouseholdSize,
        Indicator::WomenHomeLabor,
        Indicator::EconomicParticipation,
        Indicator::IncomeRatioBySex,
        Indicator::InformalEmployment,
        Indicator::Gini,
        Indicator::AdultEducation,
        Indicator::BasicServices,
        Indicator::Victimization,
        Indicator::QuintileRatio,
    ];

    /// Dataset key; `<key>.csv` is the expected source file name.
    pub fn key(&self) -> &'static str {
        match self {
            Indicator::HouseholdSize => "tamano_hogar",
            Indicator::WomenHomeLabor => "mujeres_labor_hogar_AG_quintiles",
            Indicator::EconomicParticipation => "tasa_de_participacion_economica",
            Indicator::IncomeRatioBySex => "relacion_ingreso_medio_sexo",
            Indicator::InformalEmployment => "ocupados_informal_sexo",
            Indicator::Gini => "gini",
            Indicator::AdultEducation => "poblacion_adulta_escolaridad",
            Indicator::BasicServices => "hogares_disponibilidad_servicios",
            Indicator::Victimization => "tasa_victimizacion",
            Indicator::QuintileRatio => "relacion_quintil_5_1",
        }
    }

    /// Human-readable indicator title, used to build chart titles.
    pub fn title(&self) -> &'static str {
        match self {
            Indicator::HouseholdSize => "Tamaño medio de los hogares",
            Indicator::WomenHomeLabor => {
                "Mujeres con dedicación exclusiva a las labores del hogar, por quintil y área"
            }
            Indicator::EconomicParticipation => {
                "Tasa de participación económica de la población, por grupos de edad, sexo y área geográfica"
            }
            Indicator::IncomeRatioBySex => {
                "Relación del ingreso medio entre los sexos por años de instrucción y área geográfica"
            }
            Indicator::InformalEmployment => {
                "Ocupados urbanos en sectores de baja productividad (informales), por sexo"
            }
            Indicator::Gini => "Coeficiente de Gini",
            Indicator::AdultEducation => {
                "Población adulta según nivel educativo, por área geográfica y sexo"
            }
            Indicator::BasicServices => {
                "Hogares según disponibilidad de servicios básicos en la vivienda, por área geográfica"
            }
            Indicator::Victimization => "Tasa de victimización, por sexo",
            Indicator::QuintileRatio => {
                "Relación del ingreso medio per cápita del hogar: quintil 5 / quintil 1"
            }
        }
    }

    /// Whether values live on a 0–100 percent scale (fixes the y axis).
    pub fn percent_scale(&self) -> bool {
        matches!(
            self,
            Indicator::WomenHomeLabor
                | Indicator::EconomicParticipation
                | Indicator::InformalEmployment
                | Indicator::AdultEducation
                | Indicator::BasicServices
                | Indicator::Victimization
        )
    }

    /// Columns a conforming source table must carry.
    pub fn required_columns(&self) -> &'static [&'static str] {
        match self {
            Indicator::HouseholdSize | Indicator::WomenHomeLabor => {
                &[COUNTRY, YEAR, VALUE, AREA, QUINTILE]
            }
            Indicator::EconomicParticipation => &[COUNTRY, YEAR, VALUE, AREA, SEX, AGE_GROUP],
            Indicator::IncomeRatioBySex => &[COUNTRY, YEAR, VALUE, AREA, EDUCATION],
            Indicator::InformalEmployment => &[COUNTRY, YEAR, VALUE, SEX, LOW_PRODUCTIVITY],
            Indicator::Gini | Indicator::QuintileRatio => &[COUNTRY, YEAR, VALUE, AREA],
            Indicator::AdultEducation => &[COUNTRY, YEAR, VALUE, AREA, SEX, EDUCATION],
            Indicator::BasicServices => &[COUNTRY, YEAR, VALUE, AREA, SERVICES],
            Indicator::Victimization => &[COUNTRY, YEAR, VALUE, SEX],
        }
    }

    /// Look an indicator up by its dataset key.
    pub fn from_key(key: &str) -> Option<Indicator> {
        Indicator::ALL.iter().copied().find(|i| i.key() == key)
    }
}
