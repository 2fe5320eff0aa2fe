use ep_core::{
    AdminProfile, CompanyProfile, InstitutionProfile, RoleProfile, StudentProfile,
};

use chrono::NaiveDate;
use clap::Subcommand;

/// Role-specific registration attributes
#[derive(Subcommand)]
pub(crate) enum RegisterCommands {
    Student {
        #[arg(long)]
        first_name: String,

        #[arg(long)]
        last_name: String,

        #[arg(long)]
        phone: Option<String>,

        /// YYYY-MM-DD
        #[arg(long)]
        date_of_birth: Option<NaiveDate>,

        #[arg(long)]
        high_school: Option<String>,
    },

    Institution {
        /// Document id from `portal institutions`
        #[arg(long)]
        institution_id: String,

        #[arg(long)]
        institution_name: String,

        #[arg(long)]
        contact_person: String,

        #[arg(long)]
        phone: Option<String>,
    },

    Company {
        #[arg(long)]
        company_name: String,

        #[arg(long)]
        contact_person: String,

        #[arg(long)]
        industry: Option<String>,

        #[arg(long)]
        phone: Option<String>,

        #[arg(long)]
        address: Option<String>,
    },

    Admin {
        #[arg(long)]
        full_name: String,
    },
}

impl RegisterCommands {
    pub(crate) fn into_profile(self) -> RoleProfile {
        match self {
            Self::Student {
                first_name,
                last_name,
                phone,
                date_of_birth,
                high_school,
            } => StudentProfile {
                first_name,
                last_name,
                phone,
                date_of_birth,
                high_school,
            }
            .into(),
            Self::Institution {
                institution_id,
                institution_name,
                contact_person,
                phone,
            } => InstitutionProfile {
                institution_id,
                institution_name,
                contact_person,
                phone,
            }
            .into(),
            Self::Company {
                company_name,
                contact_person,
                industry,
                phone,
                address,
            } => CompanyProfile {
                company_name,
                contact_person,
                industry,
                phone,
                address,
            }
            .into(),
            Self::Admin { full_name } => AdminProfile { full_name }.into(),
        }
    }
}
