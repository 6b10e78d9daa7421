use chrono::NaiveDate;

use crate::model::player::Player;

// (id, name, position, dob, contact, address, joined)
type SeedRow = (u32, &'static str, &'static str, (i32, u32, u32), &'static str, &'static str, (i32, u32, u32));

const ACADEMY_PLAYERS: [SeedRow; 16] = [
    (1, "Rhythm Pawar", "Point Guard", (2010, 10, 20), "7568913051", "3/136 GoverdhanVilas Sector-14 Udaipur", (2023, 10, 1)),
    (2, "Ayona Eldos", "Point Guard", (2007, 2, 2), "0987654321", "456 Avenue", (2020, 10, 1)),
    (3, "Mohit Kumar", "Point Guard", (2005, 3, 3), "1122334455", "789 Boulevard", (2023, 8, 1)),
    (4, "Ponnu", "Point Guard", (2000, 4, 4), "5566778899", "101 Parkway", (2023, 7, 1)),
    (5, "Pranav Nair", "Shooting Guard", (2002, 11, 15), "7788990011", "22 MG Road, Bangalore", (2022, 5, 15)),
    (6, "Aditya Sharma", "Small Forward", (2001, 7, 30), "9900112233", "45 Nehru Nagar, Delhi", (2021, 9, 10)),
    (7, "Ishaan Patel", "Power Forward", (2003, 5, 12), "8877665544", "7 Lake View, Hyderabad", (2023, 1, 20)),
    (8, "Kavya Reddy", "Center", (2004, 8, 25), "9988776655", "12 Hillside, Chennai", (2022, 11, 5)),
    (9, "Rahul Verma", "Point Guard", (2006, 1, 18), "7766554433", "33 Green Park, Kolkata", (2023, 3, 12)),
    (10, "Neha Gupta", "Shooting Guard", (2005, 9, 22), "8855443322", "9 Royal Apartments, Mumbai", (2022, 7, 18)),
    (11, "Vikram Singh", "Small Forward", (2003, 12, 5), "9922334455", "18 Sports Complex, Pune", (2021, 12, 1)),
    (12, "Ananya Joshi", "Power Forward", (2004, 4, 30), "7788996655", "5 Athlete Village, Ahmedabad", (2023, 2, 14)),
    (13, "Arjun Menon", "Center", (2002, 6, 17), "8899001122", "14 Basketball Lane, Kochi", (2020, 8, 25)),
    (14, "Divya Ranganathan", "Point Guard", (2007, 3, 8), "7766889944", "27 Hoops Colony, Chandigarh", (2023, 4, 30)),
    (15, "Rohan Malhotra", "Shooting Guard", (2005, 10, 11), "9988770011", "3 Dunk Street, Jaipur", (2022, 9, 15)),
    (16, "P", "Guard", (2000, 4, 4), "5566778899", "101 Parkway", (2025, 2, 1)),
];

fn ymd((y, m, d): (i32, u32, u32)) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(y, m, d)
}

/// The roster a fresh install starts with, attendance and fees empty.
pub fn academy_roster() -> Vec<Player> {
    ACADEMY_PLAYERS
        .iter()
        .map(|&(id, name, position, dob, contact, address, joined)| Player {
            position: Some(position.to_string()),
            dob: ymd(dob),
            contact: Some(contact.to_string()),
            address: Some(address.to_string()),
            join_date: ymd(joined),
            ..Player::new(id, name)
        })
        .collect()
}
