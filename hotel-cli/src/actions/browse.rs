//! Customer workflows: finding hotels, rooms and bookings.

use std::io::{BufRead, Write};

use hotel::operations::{self, BookingRequest, BookingStage, BookingWorkflow, REPORT_LIMIT, SEARCH_RADIUS};
use hotel::{HotelId, IsoDate, RoomNumber};

use crate::error::CliError;
use crate::menu::Context;
use crate::output::print_table;
use crate::prompt::Prompter;

/// Lists hotels around a point.
pub fn hotels_near<R: BufRead, W: Write>(ctx: &mut Context, p: &mut Prompter<R, W>) -> Result<(), CliError> {
    let latitude = p.coordinate("\tEnter latitude: ", "latitude")?;
    let longitude = p.coordinate("\tEnter longitude: ", "longitude")?;

    let hotels = operations::hotels_near(&ctx.db, &ctx.session, latitude, longitude)?;
    if hotels.is_empty() {
        return p.say(&format!(
            "No hotels found within {SEARCH_RADIUS} units of the specified location."
        ));
    }
    print_table(p.output(), &hotels, ctx.column_width)?;
    Ok(())
}

/// Lists the rooms of a hotel that are free on a date.
pub fn view_rooms<R: BufRead, W: Write>(ctx: &mut Context, p: &mut Prompter<R, W>) -> Result<(), CliError> {
    let hotel_id: HotelId = p.value("Enter hotel ID: ")?;
    let date: IsoDate = p.value("Enter your visiting date (YYYY-MM-DD): ")?;

    let rooms = operations::available_rooms(&ctx.db, &ctx.session, hotel_id, date)?;
    match rooms.cell(0, "hotelName") {
        None => p.say(&format!("No rooms are available at hotel {hotel_id} on {date}.")),
        Some(name) => {
            p.say(&format!("Rooms available for {name} on {date}"))?;
            print_table(p.output(), &rooms, ctx.column_width)?;
            Ok(())
        }
    }
}

/// Books a room for the logged-in customer.
///
/// The price is shown once the room is known to be free, before the booking
/// is written. A rejected attempt prints no price.
pub fn book_room<R: BufRead, W: Write>(ctx: &mut Context, p: &mut Prompter<R, W>) -> Result<(), CliError> {
    let hotel_id: HotelId = p.value("Enter Hotel ID: ")?;
    let room_number: RoomNumber = p.value("Enter Room Number: ")?;
    let date: IsoDate = p.value("Enter Date (YYYY-MM-DD): ")?;

    let request = BookingRequest {
        hotel_id,
        room_number,
        date,
    };
    let mut workflow = BookingWorkflow::new(&ctx.db, &ctx.session, request)?;
    while workflow.stage() != BookingStage::Insert {
        workflow.step()?;
    }
    if let Some(price) = workflow.price() {
        p.say(&format!("Room price: {price}"))?;
    }

    let confirmation = workflow.run()?;
    p.say(&format!(
        "Room booked successfully! Your booking ID is {}.",
        confirmation.booking_id
    ))
}

/// Shows the customer's latest bookings.
pub fn recent_bookings<R: BufRead, W: Write>(ctx: &mut Context, p: &mut Prompter<R, W>) -> Result<(), CliError> {
    let bookings = operations::recent_bookings(&ctx.db, &ctx.session)?;
    if bookings.is_empty() {
        return p.say("You have no booking history yet.");
    }

    if print_table(p.output(), &bookings, ctx.column_width)? < REPORT_LIMIT {
        p.say("You have reached the end of your booking history.")?;
    }
    Ok(())
}
