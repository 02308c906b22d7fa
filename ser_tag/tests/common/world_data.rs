// Structured random data in the style of serialization benchmarks.

use std::collections::BTreeMap;

use rand::Rng;
use ser_tag::{Load, Save};

pub trait Generate {
	fn generate<R: Rng>(rng: &mut R) -> Self;
}

#[derive(Save, Load, Default, Clone, Copy, Debug, PartialEq)]
#[repr(u8)]
pub enum GameMode {
	#[default]
	Survival,
	Creative,
	Adventure,
	Spectator,
}

impl Generate for GameMode {
	fn generate<R: Rng>(rng: &mut R) -> Self {
		match rng.gen_range(0..4) {
			0 => GameMode::Survival,
			1 => GameMode::Creative,
			2 => GameMode::Adventure,
			_ => GameMode::Spectator,
		}
	}
}

#[derive(Save, Load, Default, Clone, Debug, PartialEq)]
pub struct Item {
	pub count: i8,
	pub slot: u8,
	pub id: String,
}

impl Generate for Item {
	fn generate<R: Rng>(rng: &mut R) -> Self {
		const IDS: [&str; 8] = [
			"dirt",
			"stone",
			"pickaxe",
			"sand",
			"gravel",
			"shovel",
			"chestplate",
			"steak",
		];
		Self {
			count: rng.gen(),
			slot: rng.gen(),
			id: IDS[rng.gen_range(0..IDS.len())].to_string(),
		}
	}
}

#[derive(Save, Load, Default, Clone, Debug, PartialEq)]
pub struct Player {
	pub name: String,
	pub health: f32,
	pub position: (f64, f64, f64),
	pub mode: GameMode,
	pub inventory: Vec<Item>,
	pub attributes: BTreeMap<String, f64>,
}

impl Generate for Player {
	fn generate<R: Rng>(rng: &mut R) -> Self {
		const NAMES: [&str; 4] = ["alice", "bob", "carol", "dave"];
		const ATTRIBUTES: [&str; 3] = ["speed", "luck", "strength"];
		let mut attributes = BTreeMap::new();
		for key in ATTRIBUTES {
			if rng.gen_bool(0.5) {
				attributes.insert(key.to_string(), rng.gen());
			}
		}
		Self {
			name: NAMES[rng.gen_range(0..NAMES.len())].to_string(),
			health: rng.gen(),
			position: (rng.gen(), rng.gen(), rng.gen()),
			mode: GameMode::generate(rng),
			inventory: (0..rng.gen_range(0..6)).map(|_| Item::generate(rng)).collect(),
			attributes,
		}
	}
}

#[derive(Save, Load, Default, Clone, Debug, PartialEq)]
pub struct World {
	pub seed: u64,
	pub players: Vec<Player>,
	pub heightmap: Vec<i16>,
}

impl Generate for World {
	fn generate<R: Rng>(rng: &mut R) -> Self {
		Self {
			seed: rng.gen(),
			players: (0..rng.gen_range(1..5)).map(|_| Player::generate(rng)).collect(),
			heightmap: (0..rng.gen_range(0..64)).map(|_| rng.gen()).collect(),
		}
	}
}

pub fn generate_world<R: Rng>(rng: &mut R) -> World {
	World::generate(rng)
}
