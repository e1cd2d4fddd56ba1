use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::enums::{DietType, IronFolicIntake};

/// Demographics captured at registration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PersonalDetails {
    pub name: Option<String>,
    pub age: f64,
    pub village: String,
    pub phone: String,
    pub education: String,
}

/// Household and socioeconomic context.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FamilyContext {
    pub income_range: String,
    pub diet_type: DietType,
    pub household_size: u32,
    pub clean_water: bool,
    pub sanitation: bool,
    pub phc_distance_km: f64,
    pub partner_occupation: String,
}

/// Obstetric history from previous pregnancies.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ObstetricHistory {
    pub gravida: u32,
    pub para: u32,
    pub abortions: u32,
    /// Free-text description of prior complications, if any.
    pub previous_complications: Option<String>,
    pub previous_c_section: bool,
    pub birth_spacing_months: u32,
}

/// Data about the ongoing pregnancy.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurrentPregnancy {
    pub lmp: NaiveDate,
    pub edd: Option<NaiveDate>,
    pub trimester: String,
    pub anc_visits: f64,
    pub tt_doses: u32,
    pub iron_folic_intake: IronFolicIntake,
}

/// Vitals and lab values from the most recent check-up.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthVitals {
    pub height_cm: f64,
    pub weight_kg: f64,
    pub bmi: f64,
    pub bp_systolic: f64,
    pub bp_diastolic: f64,
    /// g/dL
    pub hemoglobin: f64,
    /// Random blood sugar, mg/dL.
    pub blood_sugar: f64,
    pub thyroid_tsh: Option<f64>,
    pub edema: bool,
}

/// A caller-validated pregnancy record. The triage core treats every
/// numeric field as already within its clinically plausible bound.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PregnancyRecord {
    pub personal: PersonalDetails,
    pub family: FamilyContext,
    pub obstetric: ObstetricHistory,
    pub current: CurrentPregnancy,
    pub health: HealthVitals,
}
