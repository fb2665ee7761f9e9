//! Manager workflows for room repairs.

use std::io::{BufRead, Write};

use hotel::auth::require_hotel_access;
use hotel::operations::{self, RepairRequest};
use hotel::{CompanyId, HotelId, IsoDate, RoomNumber};

use crate::error::CliError;
use crate::menu::Context;
use crate::output::print_table;
use crate::prompt::Prompter;

/// Schedules a repair with a maintenance company.
pub fn place_request<R: BufRead, W: Write>(ctx: &mut Context, p: &mut Prompter<R, W>) -> Result<(), CliError> {
    let hotel_id: HotelId = p.value("Enter hotel ID: ")?;
    require_hotel_access(&ctx.db, &ctx.session, hotel_id)?;

    let room_number: RoomNumber = p.value("Enter room number: ")?;
    let company_id: CompanyId = p.value("Enter company ID: ")?;
    let repair_date: IsoDate = p.value("Enter repair date (YYYY-MM-DD): ")?;

    let request = RepairRequest {
        hotel_id,
        room_number,
        company_id,
        repair_date,
    };
    let repair_id = operations::place_repair_request(&mut ctx.db, &ctx.session, &request)?;
    p.say(&format!(
        "Room repair request placed successfully. Repair ID: {repair_id}"
    ))
}

/// Lists the requested repairs of one room.
pub fn room_history<R: BufRead, W: Write>(ctx: &mut Context, p: &mut Prompter<R, W>) -> Result<(), CliError> {
    let hotel_id: HotelId = p.value("Enter hotel ID: ")?;
    require_hotel_access(&ctx.db, &ctx.session, hotel_id)?;
    let room_number: RoomNumber = p.value("Enter room number: ")?;

    let repairs = operations::room_repair_history(&ctx.db, &ctx.session, hotel_id, room_number)?;
    if repairs.is_empty() {
        return p.say("No repair history found for the given inputs.");
    }
    p.say("Room repair history for the given inputs:")?;
    print_table(p.output(), &repairs, ctx.column_width)?;
    Ok(())
}

/// Lists the requested repairs of every room of a hotel.
pub fn hotel_history<R: BufRead, W: Write>(ctx: &mut Context, p: &mut Prompter<R, W>) -> Result<(), CliError> {
    let hotel_id: HotelId = p.value("Enter hotel ID: ")?;

    let repairs = operations::hotel_repair_history(&ctx.db, &ctx.session, hotel_id)?;
    if repairs.is_empty() {
        return p.say("No repair history found for the given hotel.");
    }
    p.say("All room repair history for the given hotel:")?;
    print_table(p.output(), &repairs, ctx.column_width)?;
    Ok(())
}
