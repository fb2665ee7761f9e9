//! Database schema definitions and SQL constants.
//!
//! Table and column names follow the hotel data files verbatim
//! (`Users.userID`, `RoomBookings.bookingDate`, ...), so imported data and
//! ad-hoc SQL read the same way.

/// Current schema version for the database.
pub const CURRENT_SCHEMA_VERSION: i32 = 1;

/// SQL statement to create the metadata table.
pub const CREATE_METADATA_TABLE: &str = r"
    CREATE TABLE IF NOT EXISTS metadata (
        key TEXT PRIMARY KEY NOT NULL,
        value TEXT NOT NULL
    )";

/// SQL statement to create the users table.
pub const CREATE_USERS_TABLE: &str = r"
    CREATE TABLE IF NOT EXISTS Users (
        userID INTEGER PRIMARY KEY AUTOINCREMENT,
        name TEXT NOT NULL,
        password TEXT NOT NULL,
        userType TEXT NOT NULL
            CHECK (lower(userType) IN ('admin', 'manager', 'customer'))
    )";

/// SQL statement to create the hotel table.
pub const CREATE_HOTEL_TABLE: &str = r"
    CREATE TABLE IF NOT EXISTS Hotel (
        hotelID INTEGER PRIMARY KEY,
        hotelName TEXT NOT NULL,
        latitude REAL NOT NULL,
        longitude REAL NOT NULL,
        dateEstablished TEXT,
        managerUserID INTEGER NOT NULL REFERENCES Users (userID)
    )";

/// SQL statement to create the rooms table.
pub const CREATE_ROOMS_TABLE: &str = r"
    CREATE TABLE IF NOT EXISTS Rooms (
        hotelID INTEGER NOT NULL REFERENCES Hotel (hotelID),
        roomNumber INTEGER NOT NULL,
        price INTEGER NOT NULL CHECK (price >= 0),
        imageURL TEXT,
        PRIMARY KEY (hotelID, roomNumber)
    )";

/// SQL statement to create the bookings table.
///
/// The UNIQUE constraint on (hotelID, roomNumber, bookingDate) is what makes
/// a booking final when two clients race for the same room and date.
pub const CREATE_ROOM_BOOKINGS_TABLE: &str = r"
    CREATE TABLE IF NOT EXISTS RoomBookings (
        bookingID INTEGER PRIMARY KEY AUTOINCREMENT,
        customerID INTEGER NOT NULL REFERENCES Users (userID),
        hotelID INTEGER NOT NULL,
        roomNumber INTEGER NOT NULL,
        bookingDate TEXT NOT NULL,
        UNIQUE (hotelID, roomNumber, bookingDate),
        FOREIGN KEY (hotelID, roomNumber) REFERENCES Rooms (hotelID, roomNumber)
    )";

/// SQL statement to create the room update audit log.
pub const CREATE_ROOM_UPDATES_LOG_TABLE: &str = r"
    CREATE TABLE IF NOT EXISTS RoomUpdatesLog (
        updateNumber INTEGER PRIMARY KEY AUTOINCREMENT,
        managerID INTEGER NOT NULL REFERENCES Users (userID),
        hotelID INTEGER NOT NULL,
        roomNumber INTEGER NOT NULL,
        updatedOn TEXT NOT NULL,
        FOREIGN KEY (hotelID, roomNumber) REFERENCES Rooms (hotelID, roomNumber)
    )";

/// SQL statement to create the maintenance company table.
pub const CREATE_MAINTENANCE_COMPANY_TABLE: &str = r"
    CREATE TABLE IF NOT EXISTS MaintenanceCompany (
        companyID INTEGER PRIMARY KEY AUTOINCREMENT,
        name TEXT NOT NULL,
        address TEXT,
        isCertified INTEGER NOT NULL DEFAULT 0
    )";

/// SQL statement to create the room repairs table.
pub const CREATE_ROOM_REPAIRS_TABLE: &str = r"
    CREATE TABLE IF NOT EXISTS RoomRepairs (
        repairID INTEGER PRIMARY KEY AUTOINCREMENT,
        companyID INTEGER NOT NULL REFERENCES MaintenanceCompany (companyID),
        hotelID INTEGER NOT NULL,
        roomNumber INTEGER NOT NULL,
        repairDate TEXT NOT NULL,
        FOREIGN KEY (hotelID, roomNumber) REFERENCES Rooms (hotelID, roomNumber)
    )";

/// SQL statement to create the repair request link table.
pub const CREATE_ROOM_REPAIR_REQUESTS_TABLE: &str = r"
    CREATE TABLE IF NOT EXISTS RoomRepairRequests (
        requestNumber INTEGER PRIMARY KEY AUTOINCREMENT,
        managerID INTEGER NOT NULL REFERENCES Users (userID),
        repairID INTEGER NOT NULL REFERENCES RoomRepairs (repairID)
    )";

/// Index for customer booking history lookups.
pub const CREATE_BOOKINGS_CUSTOMER_INDEX: &str =
    "CREATE INDEX IF NOT EXISTS idx_bookings_customer ON RoomBookings(customerID, bookingDate)";

/// Index for per-hotel update log lookups.
pub const CREATE_UPDATES_HOTEL_INDEX: &str =
    "CREATE INDEX IF NOT EXISTS idx_updates_hotel ON RoomUpdatesLog(hotelID, updatedOn)";

/// Index for per-hotel repair lookups.
pub const CREATE_REPAIRS_HOTEL_INDEX: &str =
    "CREATE INDEX IF NOT EXISTS idx_repairs_hotel ON RoomRepairs(hotelID, roomNumber, repairDate)";

/// Every table and index, in creation order.
pub const SCHEMA_STATEMENTS: [&str; 12] = [
    CREATE_METADATA_TABLE,
    CREATE_USERS_TABLE,
    CREATE_HOTEL_TABLE,
    CREATE_ROOMS_TABLE,
    CREATE_ROOM_BOOKINGS_TABLE,
    CREATE_ROOM_UPDATES_LOG_TABLE,
    CREATE_MAINTENANCE_COMPANY_TABLE,
    CREATE_ROOM_REPAIRS_TABLE,
    CREATE_ROOM_REPAIR_REQUESTS_TABLE,
    CREATE_BOOKINGS_CUSTOMER_INDEX,
    CREATE_UPDATES_HOTEL_INDEX,
    CREATE_REPAIRS_HOTEL_INDEX,
];

/// SQL statement to select the schema version from the metadata table.
pub const SELECT_SCHEMA_VERSION: &str = "SELECT value FROM metadata WHERE key = 'schema_version'";

/// SQL statement to insert or update the schema version in the metadata table.
pub const INSERT_SCHEMA_VERSION: &str =
    "INSERT OR REPLACE INTO metadata (key, value) VALUES ('schema_version', ?)";
