//! Bulk loading of reference data from CSV files.
//!
//! A data directory may hold any of `users.csv`, `hotel.csv`, `rooms.csv`,
//! `company.csv` and `bookings.csv`. Headers are the store's column names.
//! Files are loaded in dependency order inside one transaction, so a bad
//! row leaves the store unchanged.

use std::fs::File;
use std::path::Path;

use csv::{ReaderBuilder, Trim};
use rusqlite::{params, Transaction};
use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::database::Database;
use crate::error::{Error, Result};
use crate::model::{IsoDate, Price, UserType};

/// Users file name.
pub const USERS_FILE: &str = "users.csv";
/// Hotels file name.
pub const HOTELS_FILE: &str = "hotel.csv";
/// Rooms file name.
pub const ROOMS_FILE: &str = "rooms.csv";
/// Maintenance companies file name.
pub const COMPANIES_FILE: &str = "company.csv";
/// Bookings file name.
pub const BOOKINGS_FILE: &str = "bookings.csv";

/// Rows loaded from each file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ImportSummary {
    /// Rows added to `Users`.
    pub users: usize,
    /// Rows added to `Hotel`.
    pub hotels: usize,
    /// Rows added to `Rooms`.
    pub rooms: usize,
    /// Rows added to `MaintenanceCompany`.
    pub companies: usize,
    /// Rows added to `RoomBookings`.
    pub bookings: usize,
}

impl ImportSummary {
    /// Total rows loaded.
    #[must_use]
    pub const fn total(&self) -> usize {
        self.users + self.hotels + self.rooms + self.companies + self.bookings
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct UserRecord {
    #[serde(rename = "userID")]
    user_id: i64,
    name: String,
    password: String,
    user_type: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct HotelRecord {
    #[serde(rename = "hotelID")]
    hotel_id: i64,
    hotel_name: String,
    latitude: f64,
    longitude: f64,
    date_established: Option<String>,
    #[serde(rename = "managerUserID")]
    manager_user_id: i64,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RoomRecord {
    #[serde(rename = "hotelID")]
    hotel_id: i64,
    room_number: i64,
    price: i64,
    #[serde(rename = "imageURL")]
    image_url: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CompanyRecord {
    #[serde(rename = "companyID")]
    company_id: i64,
    name: String,
    address: Option<String>,
    #[serde(default)]
    is_certified: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct BookingRecord {
    #[serde(rename = "bookingID", default)]
    booking_id: Option<i64>,
    #[serde(rename = "customerID")]
    customer_id: i64,
    #[serde(rename = "hotelID")]
    hotel_id: i64,
    room_number: i64,
    booking_date: String,
}

/// Loads every data file present in `dir`.
///
/// # Errors
///
/// Returns [`Error::Csv`] for malformed files, [`Error::Validation`] for a
/// row with an unusable value, or a store error (for example a duplicate
/// key). On error nothing is loaded.
///
/// # Examples
///
/// ```no_run
/// use hotel::database::{Database, DatabaseConfig};
/// use hotel::import::import_directory;
/// use std::path::Path;
///
/// let mut db = Database::open(DatabaseConfig::new("/tmp/hotels.db")).unwrap();
/// let summary = import_directory(&mut db, Path::new("data")).unwrap();
/// println!("loaded {} rows", summary.total());
/// ```
pub fn import_directory(db: &mut Database, dir: &Path) -> Result<ImportSummary> {
    if !dir.is_dir() {
        return Err(Error::Validation {
            field: "import".into(),
            message: format!("{} is not a directory", dir.display()),
        });
    }

    let tx = db.begin_transaction()?;
    let summary = ImportSummary {
        users: load_file(&tx, &dir.join(USERS_FILE), insert_user)?,
        hotels: load_file(&tx, &dir.join(HOTELS_FILE), insert_hotel)?,
        rooms: load_file(&tx, &dir.join(ROOMS_FILE), insert_room)?,
        companies: load_file(&tx, &dir.join(COMPANIES_FILE), insert_company)?,
        bookings: load_file(&tx, &dir.join(BOOKINGS_FILE), insert_booking)?,
    };
    tx.commit()?;

    log::info!("imported {} rows from {}", summary.total(), dir.display());
    Ok(summary)
}

fn load_file<R, F>(tx: &Transaction<'_>, path: &Path, insert: F) -> Result<usize>
where
    R: DeserializeOwned,
    F: Fn(&Transaction<'_>, R) -> Result<()>,
{
    if !path.exists() {
        log::debug!("skipping missing {}", path.display());
        return Ok(0);
    }

    let mut reader = ReaderBuilder::new()
        .trim(Trim::All)
        .from_reader(File::open(path)?);

    let mut count = 0;
    for (idx, record) in reader.deserialize::<R>().enumerate() {
        insert(tx, record?).map_err(|e| match e {
            Error::Validation { field, message } | Error::InvalidInput { field, message } => {
                Error::Validation {
                    field: format!("{} row {}: {field}", path.display(), idx + 1),
                    message,
                }
            }
            other => other,
        })?;
        count += 1;
    }

    log::debug!("loaded {count} rows from {}", path.display());
    Ok(count)
}

fn insert_user(tx: &Transaction<'_>, record: UserRecord) -> Result<()> {
    let user_type: UserType = record.user_type.parse()?;
    tx.execute(
        "INSERT INTO Users (userID, name, password, userType) VALUES (?1, ?2, ?3, ?4)",
        params![record.user_id, record.name, record.password, user_type.as_str()],
    )?;
    Ok(())
}

fn insert_hotel(tx: &Transaction<'_>, record: HotelRecord) -> Result<()> {
    let established = record
        .date_established
        .as_deref()
        .map(str::parse::<IsoDate>)
        .transpose()?;
    tx.execute(
        "INSERT INTO Hotel (hotelID, hotelName, latitude, longitude, dateEstablished, managerUserID)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
        params![
            record.hotel_id,
            record.hotel_name,
            record.latitude,
            record.longitude,
            established,
            record.manager_user_id
        ],
    )?;
    Ok(())
}

fn insert_room(tx: &Transaction<'_>, record: RoomRecord) -> Result<()> {
    let price = Price::new(record.price)?;
    tx.execute(
        "INSERT INTO Rooms (hotelID, roomNumber, price, imageURL) VALUES (?1, ?2, ?3, ?4)",
        params![record.hotel_id, record.room_number, price, record.image_url],
    )?;
    Ok(())
}

fn insert_company(tx: &Transaction<'_>, record: CompanyRecord) -> Result<()> {
    let certified = match record.is_certified.as_deref().map(str::to_lowercase).as_deref() {
        None | Some("" | "false" | "f" | "no" | "0") => false,
        Some("true" | "t" | "yes" | "1") => true,
        Some(other) => {
            return Err(Error::Validation {
                field: "isCertified".into(),
                message: format!("'{other}' is not a boolean"),
            })
        }
    };
    tx.execute(
        "INSERT INTO MaintenanceCompany (companyID, name, address, isCertified)
         VALUES (?1, ?2, ?3, ?4)",
        params![record.company_id, record.name, record.address, certified],
    )?;
    Ok(())
}

fn insert_booking(tx: &Transaction<'_>, record: BookingRecord) -> Result<()> {
    let date: IsoDate = record.booking_date.parse()?;
    tx.execute(
        "INSERT INTO RoomBookings (bookingID, customerID, hotelID, roomNumber, bookingDate)
         VALUES (?1, ?2, ?3, ?4, ?5)",
        params![
            record.booking_id,
            record.customer_id,
            record.hotel_id,
            record.room_number,
            date
        ],
    )?;
    Ok(())
}
