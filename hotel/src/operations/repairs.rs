//! Repair requests.

use rusqlite::params;

use crate::auth::require_hotel_access;
use crate::database::Database;
use crate::error::Result;
use crate::model::{CompanyId, HotelId, IsoDate, RepairId, RoomNumber};
use crate::session::Session;

use super::lookup::{require_company, require_room};

/// A repair a manager wants to schedule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RepairRequest {
    /// Hotel of the room.
    pub hotel_id: HotelId,
    /// Room to repair.
    pub room_number: RoomNumber,
    /// Company doing the repair.
    pub company_id: CompanyId,
    /// Scheduled date.
    pub repair_date: IsoDate,
}

/// Records a repair and the request linking it to the acting manager.
///
/// Both rows commit together, so a repair is never left without its
/// request.
///
/// # Errors
///
/// Returns an authorization error, [`crate::Error::NotFound`] for an
/// unknown room or company, or a store error.
pub fn place_repair_request(db: &mut Database, session: &Session, request: &RepairRequest) -> Result<RepairId> {
    let manager = require_hotel_access(db, session, request.hotel_id)?;

    let tx = db.begin_transaction()?;
    require_room(&tx, request.hotel_id, request.room_number)?;
    require_company(&tx, request.company_id)?;

    let repair_id: RepairId = tx.query_row(
        "INSERT INTO RoomRepairs (companyID, hotelID, roomNumber, repairDate)
         VALUES (?1, ?2, ?3, ?4)
         RETURNING repairID",
        params![
            request.company_id,
            request.hotel_id,
            request.room_number,
            request.repair_date
        ],
        |row| row.get(0),
    )?;
    tx.execute(
        "INSERT INTO RoomRepairRequests (managerID, repairID) VALUES (?1, ?2)",
        params![manager, repair_id],
    )?;
    tx.commit()?;

    log::info!(
        "user {manager} requested repair {repair_id} for room {} of hotel {}",
        request.room_number,
        request.hotel_id
    );
    Ok(repair_id)
}
