//! Enzyme catalog (TaKaRa Bio product data).
//!
//! Unit definitions are taken from the supplier data sheets: one unit cuts
//! 1 µg of the listed substrate in one hour at the optimal temperature.

use super::{Enzyme, EnzymeKind, HeatInactivation, Substrate};

/// Lambda phage DNA, 48,502 bp
const LAMBDA_BP: u32 = 48502;

/// Adenovirus-2 DNA, 35,937 bp
const ADENOVIRUS_2_BP: u32 = 35937;

const STANDARD_HEAT_INACTIVATION: HeatInactivation = HeatInactivation {
    temperature_c: 60.0,
    minutes: 15.0,
};

pub static ECORI: Enzyme = Enzyme {
    kind: EnzymeKind::EcoRI,
    name: "EcoR I",
    site: "G'AATTC",
    substrate: Substrate {
        name: "lambda",
        size_bp: LAMBDA_BP,
        sites: 5,
    },
    temperature_c: 37.0,
    heat_inactivation: STANDARD_HEAT_INACTIVATION,
    concentration_u_per_ul: 14.0,
    buffer: "TAKARA Universal Buffer H",
};

pub static PSTI: Enzyme = Enzyme {
    kind: EnzymeKind::PstI,
    name: "Pst I",
    site: "CTGCA'G",
    substrate: Substrate {
        name: "lambda",
        size_bp: LAMBDA_BP,
        sites: 28,
    },
    temperature_c: 37.0,
    heat_inactivation: STANDARD_HEAT_INACTIVATION,
    concentration_u_per_ul: 15.0,
    buffer: "TAKARA Universal Buffer H",
};

pub static SPEI: Enzyme = Enzyme {
    kind: EnzymeKind::SpeI,
    name: "Spe I",
    site: "A'CTAGT",
    substrate: Substrate {
        name: "Adenovirus-2",
        size_bp: ADENOVIRUS_2_BP,
        sites: 3,
    },
    temperature_c: 37.0,
    heat_inactivation: STANDARD_HEAT_INACTIVATION,
    concentration_u_per_ul: 8.0,
    buffer: "TAKARA Universal Buffer M",
};

pub static XBAI: Enzyme = Enzyme {
    kind: EnzymeKind::XbaI,
    name: "Xba I",
    site: "T'CTAGA",
    substrate: Substrate {
        name: "lambda",
        size_bp: LAMBDA_BP,
        sites: 1,
    },
    temperature_c: 37.0,
    heat_inactivation: STANDARD_HEAT_INACTIVATION,
    concentration_u_per_ul: 14.0,
    buffer: "TAKARA Universal Buffer M + 0.01% BSA",
};
