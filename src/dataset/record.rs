use super::VariableKey;
use serde::{Deserialize, Serialize};

macro_rules! record {
    ($(($field:ident, $variant:ident)),* $(,)?) => {
        /// One dataset row: a country's scores for a single edition year.
        ///
        /// Score fields hold `None` where the source published no value for
        /// that year; present values are finite and within `[0, 1]` by the
        /// dataset contract, so they are not re-validated here.
        #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
        pub struct Record {
            pub country: String,
            pub year: String,
            pub region: String,
            $(
                #[serde(default)]
                pub $field: Option<f64>,
            )*
        }

        impl Record {
            /// Score stored under the given key, if any
            #[must_use]
            pub const fn score(&self, variable: VariableKey) -> Option<f64> {
                match variable {
                    $(VariableKey::$variant => self.$field,)*
                }
            }
        }
    };
}

record! {
    (roli, Roli),
    (f1, F1),
    (f2, F2),
    (f3, F3),
    (f4, F4),
    (f5, F5),
    (f6, F6),
    (f7, F7),
    (f8, F8),
    (sf11, Sf11),
    (sf12, Sf12),
    (sf13, Sf13),
    (sf14, Sf14),
    (sf15, Sf15),
    (sf16, Sf16),
    (sf21, Sf21),
    (sf22, Sf22),
    (sf23, Sf23),
    (sf24, Sf24),
    (sf31, Sf31),
    (sf32, Sf32),
    (sf33, Sf33),
    (sf34, Sf34),
    (sf41, Sf41),
    (sf42, Sf42),
    (sf43, Sf43),
    (sf44, Sf44),
    (sf45, Sf45),
    (sf46, Sf46),
    (sf47, Sf47),
    (sf48, Sf48),
    (sf51, Sf51),
    (sf52, Sf52),
    (sf53, Sf53),
    (sf61, Sf61),
    (sf62, Sf62),
    (sf63, Sf63),
    (sf64, Sf64),
    (sf65, Sf65),
    (sf71, Sf71),
    (sf72, Sf72),
    (sf73, Sf73),
    (sf74, Sf74),
    (sf75, Sf75),
    (sf76, Sf76),
    (sf77, Sf77),
    (sf81, Sf81),
    (sf82, Sf82),
    (sf83, Sf83),
    (sf84, Sf84),
    (sf85, Sf85),
    (sf86, Sf86),
    (sf87, Sf87),
}
