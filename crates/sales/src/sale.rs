use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use imprint_core::{DomainError, TitleId, impl_uuid_newtype};

/// Sale record identifier.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SaleId(Uuid);

impl_uuid_newtype!(SaleId, "SaleId");

/// Physical/digital format of a sold unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SaleFormat {
    Hardcover,
    Paperback,
    Ebook,
    Audiobook,
}

impl SaleFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            SaleFormat::Hardcover => "hardcover",
            SaleFormat::Paperback => "paperback",
            SaleFormat::Ebook => "ebook",
            SaleFormat::Audiobook => "audiobook",
        }
    }
}

impl core::str::FromStr for SaleFormat {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "hardcover" => Ok(SaleFormat::Hardcover),
            "paperback" => Ok(SaleFormat::Paperback),
            "ebook" => Ok(SaleFormat::Ebook),
            "audiobook" => Ok(SaleFormat::Audiobook),
            other => Err(DomainError::validation(format!("unknown format: {other}"))),
        }
    }
}

/// Channel a sale came through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SalesChannel {
    Retail,
    Online,
    Direct,
    Wholesale,
}

impl SalesChannel {
    pub fn as_str(&self) -> &'static str {
        match self {
            SalesChannel::Retail => "retail",
            SalesChannel::Online => "online",
            SalesChannel::Direct => "direct",
            SalesChannel::Wholesale => "wholesale",
        }
    }
}

impl core::str::FromStr for SalesChannel {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "retail" => Ok(SalesChannel::Retail),
            "online" => Ok(SalesChannel::Online),
            "direct" => Ok(SalesChannel::Direct),
            "wholesale" => Ok(SalesChannel::Wholesale),
            other => Err(DomainError::validation(format!("unknown channel: {other}"))),
        }
    }
}

/// A recorded sale of one title in one format through one channel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sale {
    pub id: SaleId,
    pub title_id: TitleId,
    pub format: SaleFormat,
    pub channel: SalesChannel,
    pub sale_date: NaiveDate,
    pub units: i64,
    pub revenue: Decimal,
}
