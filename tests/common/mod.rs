// Shared JSON fixtures shaped like SpaceTraders responses
#![allow(dead_code)]

use serde_json::{json, Value};

pub const TOKEN: &str = "test-agent-token";
pub const BEARER: &str = "Bearer test-agent-token";

pub fn agent_json() -> Value {
    json!({
        "accountId": "cl0hok34m0003ks0jjql5q8f2",
        "symbol": "BADGER",
        "headquarters": "X1-DF55-20250Z",
        "credits": 175000,
        "startingFaction": "COSMIC",
        "shipCount": 2
    })
}

pub fn route_waypoint_json(symbol: &str, x: i32, y: i32) -> Value {
    json!({
        "symbol": symbol,
        "type": "PLANET",
        "systemSymbol": "X1-DF55",
        "x": x,
        "y": y
    })
}

pub fn nav_json(status: &str, x: i32, y: i32) -> Value {
    json!({
        "systemSymbol": "X1-DF55",
        "waypointSymbol": "X1-DF55-20250Z",
        "route": {
            "origin": route_waypoint_json("X1-DF55-20250Z", x, y),
            "destination": route_waypoint_json("X1-DF55-20250Z", x, y),
            "departureTime": "2023-06-04T11:58:00.000Z",
            "arrival": "2023-06-04T12:00:00.000Z"
        },
        "status": status,
        "flightMode": "CRUISE"
    })
}

pub fn ship_json(symbol: &str, status: &str, x: i32, y: i32, fuel: u32) -> Value {
    json!({
        "symbol": symbol,
        "registration": {
            "name": symbol,
            "factionSymbol": "COSMIC",
            "role": "COMMAND"
        },
        "nav": nav_json(status, x, y),
        "fuel": {
            "current": fuel,
            "capacity": 400,
            "consumed": { "amount": 12, "timestamp": "2023-06-04T11:58:00.000Z" }
        },
        "cargo": {
            "capacity": 60,
            "units": 12,
            "inventory": [{
                "symbol": "IRON_ORE",
                "name": "Iron Ore",
                "description": "Raw iron.",
                "units": 12
            }]
        },
        "mounts": [{
            "symbol": "MOUNT_MINING_LASER_I",
            "name": "Mining Laser I",
            "description": "A basic mining laser.",
            "strength": 10,
            "requirements": { "power": 1, "crew": 0 }
        }],
        "crew": { "current": 0, "required": 0, "capacity": 0, "rotation": "STRICT", "morale": 100, "wages": 0 }
    })
}

pub fn waypoint_json(symbol: &str, x: i32, y: i32, traits: &[&str]) -> Value {
    let traits: Vec<Value> = traits
        .iter()
        .map(|t| {
            json!({
                "symbol": t,
                "name": t.replace('_', " ").to_lowercase(),
                "description": format!("{} trait", t)
            })
        })
        .collect();
    json!({
        "symbol": symbol,
        "type": "PLANET",
        "systemSymbol": "X1-DF55",
        "x": x,
        "y": y,
        "orbitals": [],
        "traits": traits,
        "chart": { "submittedBy": "COSMIC", "submittedOn": "2023-06-01T00:00:00.000Z" },
        "faction": { "symbol": "COSMIC" }
    })
}

pub fn system_json(waypoints: &[(&str, i32, i32)]) -> Value {
    let waypoints: Vec<Value> = waypoints
        .iter()
        .map(|(symbol, x, y)| {
            json!({ "symbol": symbol, "type": "ASTEROID", "x": x, "y": y, "orbitals": [] })
        })
        .collect();
    json!({
        "symbol": "X1-DF55",
        "sectorSymbol": "X1",
        "type": "RED_STAR",
        "x": -42,
        "y": 17,
        "waypoints": waypoints,
        "factions": [{ "symbol": "COSMIC" }]
    })
}

pub fn contract_json(id: &str) -> Value {
    json!({
        "id": id,
        "factionSymbol": "COSMIC",
        "type": "PROCUREMENT",
        "terms": {
            "deadline": "2023-06-11T12:00:00.000Z",
            "payment": { "onAccepted": 1500, "onFulfilled": 9000 },
            "deliver": [{
                "tradeSymbol": "IRON_ORE",
                "destinationSymbol": "X1-DF55-20250Z",
                "unitsRequired": 40,
                "unitsFulfilled": 0
            }]
        },
        "accepted": false,
        "fulfilled": false,
        "expiration": "2023-06-05T12:00:00.000Z",
        "deadlineToAccept": "2023-06-05T12:00:00.000Z"
    })
}

pub fn error_json(message: &str, code: u32) -> Value {
    json!({ "error": { "message": message, "code": code } })
}
