//! Manager workflows: room information and hotel reports.

use std::io::{BufRead, Write};

use hotel::auth::require_hotel_access;
use hotel::operations::{self, RoomUpdate, RoomUpdateOutcome, REPORT_LIMIT};
use hotel::{HotelId, IsoDate, RoomNumber};

use crate::error::CliError;
use crate::menu::Context;
use crate::output::print_table;
use crate::prompt::Prompter;

/// Changes the price and image of a room.
pub fn update_room<R: BufRead, W: Write>(ctx: &mut Context, p: &mut Prompter<R, W>) -> Result<(), CliError> {
    let hotel_id: HotelId = p.value("Enter Hotel ID: ")?;
    let room_number: RoomNumber = p.value("Enter Room Number: ")?;

    let room = operations::room_details(&ctx.db, &ctx.session, hotel_id, room_number)?;
    p.say("Current Room Information:")?;
    p.say(&format!("Price: {}", room.price))?;
    p.say(&format!("Image URL: {}", room.image_url.as_deref().unwrap_or("")))?;

    let price = p.line("Enter NEW price (enter 'skip' to keep the same): ")?;
    let image_url = p.line("Enter NEW image URL (enter 'skip' to keep the same): ")?;
    let update = RoomUpdate::from_entries(&price, &image_url)?;

    match operations::update_room_info(&mut ctx.db, &ctx.session, hotel_id, room_number, &update)? {
        RoomUpdateOutcome::NothingToUpdate => {
            p.say("Nothing to update, the room information is unchanged.")
        }
        RoomUpdateOutcome::Updated { updated_on, .. } => p.say(&format!(
            "Room information updated successfully! Timestamp: {updated_on}"
        )),
    }
}

/// Shows the latest room-information changes of a hotel.
pub fn recent_updates<R: BufRead, W: Write>(ctx: &mut Context, p: &mut Prompter<R, W>) -> Result<(), CliError> {
    let hotel_id: HotelId = p.value("Enter Hotel ID: ")?;

    let updates = operations::recent_room_updates(&ctx.db, &ctx.session, hotel_id)?;
    if updates.is_empty() {
        return p.say(&format!(
            "You have no recent updates for hotel with hotelID: {hotel_id}"
        ));
    }
    p.say(&format!("{REPORT_LIMIT} most recent room updates:"))?;
    print_table(p.output(), &updates, ctx.column_width)?;
    Ok(())
}

/// Lists the bookings of a hotel within a date range.
pub fn booking_history<R: BufRead, W: Write>(ctx: &mut Context, p: &mut Prompter<R, W>) -> Result<(), CliError> {
    let hotel_id: HotelId = p.value("\tEnter Hotel ID: ")?;
    require_hotel_access(&ctx.db, &ctx.session, hotel_id)?;

    p.say("\tEnter the range of your desired output below")?;
    let from: IsoDate = p.value("\tEnter starting date (YYYY-MM-DD): ")?;
    let to: IsoDate = p.value("\tEnter ending date (YYYY-MM-DD): ")?;

    let bookings = operations::hotel_booking_history(&ctx.db, &ctx.session, hotel_id, from, to)?;
    if bookings.is_empty() {
        return p.say(&format!(
            "No bookings found for hotel {hotel_id} between {from} and {to}."
        ));
    }
    print_table(p.output(), &bookings, ctx.column_width)?;
    Ok(())
}

/// Shows the customers with the most bookings at a hotel.
pub fn regular_customers<R: BufRead, W: Write>(ctx: &mut Context, p: &mut Prompter<R, W>) -> Result<(), CliError> {
    let hotel_id: HotelId = p.value("Enter hotel ID: ")?;

    let customers = operations::regular_customers(&ctx.db, &ctx.session, hotel_id)?;
    if customers.is_empty() {
        return p.say(&format!("No customer has booked hotel {hotel_id} yet."));
    }
    p.say(&format!(
        "Top {REPORT_LIMIT} customers who made the most bookings in the hotel:"
    ))?;
    print_table(p.output(), &customers, ctx.column_width)?;
    Ok(())
}
