//! Command line console for the order catalog

use notefleet_domain::{Item, Location};
use notefleet_store::{LogisticSystem, Placement};
use notefleet_types::{OrderId, OutputFormat, Result};
use serde::Serialize;
use std::io::{BufRead, Write};

use super::{Console, MenuExit};

const MENU_TEXT: &str = "
        Logistics Menu

        1. Place Order
        2. Track Order
        3. Show Fleet
        4. Show Orders
        5. Quit
        ";

/// Interactive front-end for placing and tracking orders
pub struct LogisticsCli<R, W> {
    system: LogisticSystem,
    console: Console<R, W>,
    format: OutputFormat,
}

impl<R: BufRead, W: Write> LogisticsCli<R, W> {
    pub fn new(system: LogisticSystem, console: Console<R, W>, format: OutputFormat) -> Self {
        Self {
            system,
            console,
            format,
        }
    }

    pub fn system(&self) -> &LogisticSystem {
        &self.system
    }

    pub fn console(&self) -> &Console<R, W> {
        &self.console
    }

    /// Display the menu and respond to choices until quit or end of input
    pub fn run(&mut self) -> Result<MenuExit> {
        loop {
            self.console.say(MENU_TEXT)?;
            let Some(choice) = self.console.ask("\tEnter a choice: ")? else {
                return Ok(MenuExit::EndOfInput);
            };

            match choice.trim() {
                "1" => self.place_order()?,
                "2" => self.track_order()?,
                "3" => self.show_fleet()?,
                "4" => self.show_orders()?,
                "5" => {
                    self.console.say("\tGoodbye!")?;
                    return Ok(MenuExit::Quit);
                }
                other => self
                    .console
                    .say(&format!("\t{} is not a valid choice", other))?,
            }
        }
    }

    fn place_order(&mut self) -> Result<()> {
        let user_name = self.console.prompt("\n\tEnter your name: ")?;
        let city = self.console.prompt("\tEnter the city: ")?;
        let raw_postoffice = self.console.prompt("\tEnter the post office number: ")?;
        // Items are read even for a bad post office so they are not taken as menu choices
        let items = self.read_items()?;
        let Ok(postoffice) = raw_postoffice.trim().parse::<u32>() else {
            return self.console.say(&format!(
                "\t{} is not a valid post office number",
                raw_postoffice.trim()
            ));
        };

        let order = match self
            .system
            .create_order(user_name, Location::new(city, postoffice), items)
        {
            Ok(order) => order,
            Err(e) => return self.console.say(&format!("\t{}", e)),
        };
        self.console
            .say(&format!("\tYour order number is {}", order.order_id))?;

        match self.system.place_order(order) {
            Placement::Assigned { order_id, vehicle } => self.console.say(&format!(
                "\tOrder #{} assigned to vehicle {}",
                order_id, vehicle
            )),
            Placement::NoVehicleAvailable(rejected) => {
                self.console.say(&format!("\t{}", rejected.status()))
            }
            Placement::InvalidOrder(rejected) => self.console.say(&format!(
                "\tOrder #{} could not be placed",
                rejected.order_id
            )),
        }
    }

    /// Read name/price pairs until an empty name
    fn read_items(&mut self) -> Result<Vec<Item>> {
        let mut items = Vec::new();
        loop {
            let name = self
                .console
                .prompt("\tItem name (empty to finish): ")?;
            if name.trim().is_empty() {
                return Ok(items);
            }
            let raw_price = self.console.prompt("\tItem price: ")?;
            let parsed = raw_price
                .trim()
                .parse::<f64>()
                .map_err(|e| e.to_string())
                .and_then(|price| Item::new(name, price).map_err(|e| e.to_string()));
            match parsed {
                Ok(item) => items.push(item),
                Err(e) => self
                    .console
                    .say(&format!("\tSkipping item: {}", e))?,
            }
        }
    }

    fn track_order(&mut self) -> Result<()> {
        let raw_id = self.console.prompt("\n\tEnter an order number: ")?;
        let Ok(id) = raw_id.parse::<OrderId>() else {
            return self
                .console
                .say(&format!("\t{} is not a valid order number", raw_id.trim()));
        };

        match self.system.track_order(id) {
            Ok(status) => match self.format {
                OutputFormat::Json => self.say_json(&status),
                OutputFormat::Table => self.console.say(&format!("\t{}", status)),
            },
            Err(_) => self.console.say("\tNo such order."),
        }
    }

    fn show_fleet(&mut self) -> Result<()> {
        match self.format {
            OutputFormat::Json => {
                let content = serde_json::to_string_pretty(self.system.vehicles())?;
                self.console.say(&content)
            }
            OutputFormat::Table => {
                self.console.say(&format!(
                    "\t{} of {} vehicles available",
                    self.system.available_vehicle_count(),
                    self.system.vehicles().len()
                ))?;
                for vehicle in self.system.vehicles() {
                    let state = if vehicle.is_available() {
                        "available"
                    } else {
                        "assigned"
                    };
                    self.console
                        .say(&format!("\tVehicle {}: {}", vehicle.id, state))?;
                }
                Ok(())
            }
        }
    }

    fn show_orders(&mut self) -> Result<()> {
        match self.format {
            OutputFormat::Json => {
                let content = serde_json::to_string_pretty(self.system.orders())?;
                self.console.say(&content)
            }
            OutputFormat::Table => {
                for order in self.system.orders() {
                    self.console.say(&format!(
                        "\t#{} {} -> {} ({}), {} items",
                        order.order_id,
                        order.user_name,
                        order.location.city(),
                        order.location.postoffice(),
                        order.items.len()
                    ))?;
                    for item in &order.items {
                        self.console.say(&format!("\t\t{}", item))?;
                    }
                }
                Ok(())
            }
        }
    }

    fn say_json<T: Serialize>(&mut self, value: &T) -> Result<()> {
        let content = serde_json::to_string_pretty(value)?;
        self.console.say(&content)
    }
}
