use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

/// Closed set of score keys a record can carry: the overall index, the
/// eight factors, and the forty-four sub-factors (keyed `sf{factor}{sub}`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, EnumString, Serialize, Deserialize)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum VariableKey {
    Roli,
    F1,
    F2,
    F3,
    F4,
    F5,
    F6,
    F7,
    F8,
    Sf11,
    Sf12,
    Sf13,
    Sf14,
    Sf15,
    Sf16,
    Sf21,
    Sf22,
    Sf23,
    Sf24,
    Sf31,
    Sf32,
    Sf33,
    Sf34,
    Sf41,
    Sf42,
    Sf43,
    Sf44,
    Sf45,
    Sf46,
    Sf47,
    Sf48,
    Sf51,
    Sf52,
    Sf53,
    Sf61,
    Sf62,
    Sf63,
    Sf64,
    Sf65,
    Sf71,
    Sf72,
    Sf73,
    Sf74,
    Sf75,
    Sf76,
    Sf77,
    Sf81,
    Sf82,
    Sf83,
    Sf84,
    Sf85,
    Sf86,
    Sf87,
}

/// Grouping used when presenting variables to a user. Purely a display
/// concern; the aggregation math never consults it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
pub enum VariableCategory {
    General,
    Factor,
    Sf1,
    Sf2,
    Sf3,
    Sf4,
    Sf5,
    Sf6,
    Sf7,
    Sf8,
}

impl VariableCategory {
    /// Heading shown above this group in variable listings
    #[must_use]
    pub const fn heading(self) -> &'static str {
        match self {
            Self::General => "Overall Index",
            Self::Factor => "Factors",
            Self::Sf1 => "F1 - Constraints on Government Power",
            Self::Sf2 => "F2 - Absence of Corruption",
            Self::Sf3 => "F3 - Open Government",
            Self::Sf4 => "F4 - Fundamental Rights",
            Self::Sf5 => "F5 - Order and Security",
            Self::Sf6 => "F6 - Regulatory Enforcement",
            Self::Sf7 => "F7 - Civil Justice",
            Self::Sf8 => "F8 - Criminal Justice",
        }
    }
}

#[derive(Debug)]
pub struct VariableDef {
    pub key: VariableKey,
    pub label: &'static str,
    pub category: VariableCategory,
}

macro_rules! variable_def {
    ($key:ident, $label:expr, $category:ident) => {
        VariableDef {
            key: VariableKey::$key,
            label: $label,
            category: VariableCategory::$category,
        }
    };
}

/// One descriptor per score key, in presentation order.
pub const VARIABLE_DEFINITIONS: &[VariableDef] = &[
    variable_def!(Roli, "ROLI - Overall Index", General),
    variable_def!(F1, "F1 - Constraints on Government Power", Factor),
    variable_def!(F2, "F2 - Absence of Corruption", Factor),
    variable_def!(F3, "F3 - Open Government", Factor),
    variable_def!(F4, "F4 - Fundamental Rights", Factor),
    variable_def!(F5, "F5 - Order and Security", Factor),
    variable_def!(F6, "F6 - Regulatory Enforcement", Factor),
    variable_def!(F7, "F7 - Civil Justice", Factor),
    variable_def!(F8, "F8 - Criminal Justice", Factor),
    variable_def!(Sf11, "1.1 - Limited by the legislature", Sf1),
    variable_def!(Sf12, "1.2 - Limited by the judiciary", Sf1),
    variable_def!(Sf13, "1.3 - Limited by independent auditing and review", Sf1),
    variable_def!(Sf14, "1.4 - Officials sanctioned for misconduct", Sf1),
    variable_def!(Sf15, "1.5 - Subject to non-governmental checks", Sf1),
    variable_def!(Sf16, "1.6 - Transition of power subject to the law", Sf1),
    variable_def!(Sf21, "2.1 - No private gain (Executive)", Sf2),
    variable_def!(Sf22, "2.2 - No private gain (Judicial)", Sf2),
    variable_def!(Sf23, "2.3 - No private gain (Police & Military)", Sf2),
    variable_def!(Sf24, "2.4 - No private gain (Legislative)", Sf2),
    variable_def!(Sf31, "3.1 - Publicized laws and government data", Sf3),
    variable_def!(Sf32, "3.2 - Right to information", Sf3),
    variable_def!(Sf33, "3.3 - Civic participation", Sf3),
    variable_def!(Sf34, "3.4 - Complaint mechanisms", Sf3),
    variable_def!(Sf41, "4.1 - Equal treatment and non-discrimination", Sf4),
    variable_def!(Sf42, "4.2 - Right to life and security", Sf4),
    variable_def!(Sf43, "4.3 - Due process and rights of the accused", Sf4),
    variable_def!(Sf44, "4.4 - Freedom of opinion and expression", Sf4),
    variable_def!(Sf45, "4.5 - Freedom of belief and religion", Sf4),
    variable_def!(Sf46, "4.6 - Freedom from interference with privacy", Sf4),
    variable_def!(Sf47, "4.7 - Freedom of assembly and association", Sf4),
    variable_def!(Sf48, "4.8 - Fundamental labor rights", Sf4),
    variable_def!(Sf51, "5.1 - Crime is effectively controlled", Sf5),
    variable_def!(Sf52, "5.2 - Civil conflict is effectively limited", Sf5),
    variable_def!(Sf53, "5.3 - No violence to redress personal grievances", Sf5),
    variable_def!(Sf61, "6.1 - Regulations are effectively enforced", Sf6),
    variable_def!(Sf62, "6.2 - Enforced without improper influence", Sf6),
    variable_def!(Sf63, "6.3 - No unreasonable delay in proceedings", Sf6),
    variable_def!(Sf64, "6.4 - Due process in administrative proceedings", Sf6),
    variable_def!(Sf65, "6.5 - No expropriation without lawful process", Sf6),
    variable_def!(Sf71, "7.1 - Access and affordability", Sf7),
    variable_def!(Sf72, "7.2 - Free of discrimination", Sf7),
    variable_def!(Sf73, "7.3 - Free of corruption", Sf7),
    variable_def!(Sf74, "7.4 - Free of improper government influence", Sf7),
    variable_def!(Sf75, "7.5 - Not subject to unreasonable delay", Sf7),
    variable_def!(Sf76, "7.6 - Effectively enforced", Sf7),
    variable_def!(Sf77, "7.7 - Accessible alternative dispute resolution", Sf7),
    variable_def!(Sf81, "8.1 - Investigation system is effective", Sf8),
    variable_def!(Sf82, "8.2 - Adjudication is timely and effective", Sf8),
    variable_def!(Sf83, "8.3 - Correctional system reduces criminal behavior", Sf8),
    variable_def!(Sf84, "8.4 - Criminal system is impartial", Sf8),
    variable_def!(Sf85, "8.5 - Free of corruption", Sf8),
    variable_def!(Sf86, "8.6 - Free of improper government influence", Sf8),
    variable_def!(Sf87, "8.7 - Due process and rights of the accused", Sf8),
];

impl VariableKey {
    /// Descriptor for this key
    ///
    /// The definitions table is kept in declaration order of the enum,
    /// which the test suite verifies.
    #[must_use]
    pub const fn def(self) -> &'static VariableDef {
        &VARIABLE_DEFINITIONS[self as usize]
    }

    /// Display label for this key
    #[must_use]
    pub const fn label(self) -> &'static str {
        self.def().label
    }

    /// Display grouping for this key
    #[must_use]
    pub const fn category(self) -> VariableCategory {
        self.def().category
    }
}
