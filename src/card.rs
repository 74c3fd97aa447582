//! Contact cards and the share flow built on the encoder
//!
//! Only the name and one phone number travel in the matrix, as a compact
//! JSON record: `{"t":"phone-card","n":first,"l":last,"p":phone}`.

use serde::{Deserialize, Serialize};

use crate::error::ShareError;
use crate::models::QrMatrix;
use crate::pipeline::encode_to_matrix;
use crate::render::{Surface, draw};

/// Type tag carried in every shared record
pub const CARD_TYPE: &str = "phone-card";

/// One phone number of a contact
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PhoneNumber {
    /// Number as entered
    pub number: String,
    /// Preferred number for sharing
    pub is_primary: bool,
}

/// The contact fields the share flow reads
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ContactCard {
    /// Given name
    pub first_name: String,
    /// Family name
    pub last_name: String,
    /// All known numbers
    pub phone_numbers: Vec<PhoneNumber>,
}

#[derive(Serialize)]
struct SharedRecord<'a> {
    t: &'a str,
    n: &'a str,
    l: &'a str,
    p: &'a str,
}

impl ContactCard {
    /// Card with a single primary number
    pub fn new(first_name: &str, last_name: &str, phone: &str) -> Self {
        Self {
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
            phone_numbers: vec![PhoneNumber {
                number: phone.to_string(),
                is_primary: true,
            }],
        }
    }

    /// First number flagged primary, else the first number. Blank numbers
    /// are skipped.
    pub fn primary_phone(&self) -> Option<&str> {
        let usable = || {
            self.phone_numbers
                .iter()
                .filter(|p| !p.number.trim().is_empty())
        };
        usable()
            .find(|p| p.is_primary)
            .or_else(|| usable().next())
            .map(|p| p.number.trim())
    }
}

/// Build the compact record shared for `card`.
pub fn share_payload(card: &ContactCard) -> Result<String, ShareError> {
    let phone = card.primary_phone().ok_or(ShareError::NoPhoneNumber)?;
    let record = SharedRecord {
        t: CARD_TYPE,
        n: card.first_name.trim(),
        l: card.last_name.trim(),
        p: phone,
    };
    Ok(serde_json::to_string(&record)?)
}

/// Encode `card` and draw it onto `surface`.
///
/// The surface is only touched once encoding has succeeded.
pub fn share_contact<S: Surface + ?Sized>(
    card: &ContactCard,
    surface: &mut S,
) -> Result<QrMatrix, ShareError> {
    let payload = share_payload(card)?;
    let matrix = encode_to_matrix(&payload)?;
    draw(&matrix, surface);
    Ok(matrix)
}
