use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use storefront_catalog::ProductSelection;
use storefront_core::{
    Aggregate, AggregateRoot, CartId, DomainError, Event, Money, ProductId,
};

/// Colour and variant picked on the detail page.
///
/// Part of a line's identity: the same product in two colours is two lines.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LineOptions {
    pub color: Option<String>,
    pub variant: Option<String>,
}

impl LineOptions {
    pub fn is_empty(&self) -> bool {
        self.color.is_none() && self.variant.is_none()
    }
}

/// One product in the cart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLine {
    pub product_id: ProductId,
    pub name: String,
    pub unit_price: Money,
    /// Always at least 1.
    pub quantity: u32,
    #[serde(default, skip_serializing_if = "LineOptions::is_empty")]
    pub options: LineOptions,
}

impl CartLine {
    pub fn line_total(&self) -> Money {
        self.unit_price.times(self.quantity)
    }

    fn is(&self, product_id: &ProductId, options: &LineOptions) -> bool {
        &self.product_id == product_id && &self.options == options
    }
}

/// Aggregate root: Cart (session-local, reset on reload).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cart {
    id: CartId,
    lines: Vec<CartLine>,
    version: u64,
    updated_at: Option<DateTime<Utc>>,
}

impl Cart {
    pub fn empty(id: CartId) -> Self {
        Self {
            id,
            lines: Vec::new(),
            version: 0,
            updated_at: None,
        }
    }

    pub fn id_typed(&self) -> CartId {
        self.id
    }

    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn line(&self, product_id: &ProductId, options: &LineOptions) -> Option<&CartLine> {
        self.lines.iter().find(|l| l.is(product_id, options))
    }

    /// When the last applied event happened.
    pub fn updated_at(&self) -> Option<DateTime<Utc>> {
        self.updated_at
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Sum of quantities (the navigation badge count).
    pub fn item_count(&self) -> u32 {
        self.lines.iter().map(|l| l.quantity).sum()
    }

    pub fn subtotal(&self) -> Money {
        self.lines.iter().map(CartLine::line_total).sum()
    }
}

impl AggregateRoot for Cart {
    type Id = CartId;

    fn id(&self) -> &Self::Id {
        &self.id
    }

    fn version(&self) -> u64 {
        self.version
    }
}

/// Command: AddItem (adds to the quantity if the same product and options are
/// already in the cart).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddItem {
    pub cart_id: CartId,
    pub product_id: ProductId,
    pub name: String,
    pub unit_price: Money,
    pub quantity: u32,
    #[serde(default)]
    pub options: LineOptions,
    pub occurred_at: DateTime<Utc>,
}

impl AddItem {
    /// "Add to Cart" on the detail page.
    pub fn from_selection(
        cart_id: CartId,
        selection: ProductSelection,
        quantity: u32,
        occurred_at: DateTime<Utc>,
    ) -> Self {
        Self {
            cart_id,
            product_id: selection.product_id,
            name: selection.name,
            unit_price: selection.unit_price,
            quantity,
            options: LineOptions {
                color: selection.color,
                variant: selection.variant,
            },
            occurred_at,
        }
    }
}

/// Command: ChangeQuantity. Quantities below 1 are raised to 1.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChangeQuantity {
    pub cart_id: CartId,
    pub product_id: ProductId,
    #[serde(default)]
    pub options: LineOptions,
    pub quantity: u32,
    pub occurred_at: DateTime<Utc>,
}

/// Command: RemoveItem.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoveItem {
    pub cart_id: CartId,
    pub product_id: ProductId,
    #[serde(default)]
    pub options: LineOptions,
    pub occurred_at: DateTime<Utc>,
}

/// Command: ClearCart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClearCart {
    pub cart_id: CartId,
    pub occurred_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum CartCommand {
    AddItem(AddItem),
    ChangeQuantity(ChangeQuantity),
    RemoveItem(RemoveItem),
    ClearCart(ClearCart),
}

/// Event: ItemAdded. `quantity` is the amount added, not the resulting total.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemAdded {
    pub cart_id: CartId,
    pub product_id: ProductId,
    pub name: String,
    pub unit_price: Money,
    pub quantity: u32,
    #[serde(default)]
    pub options: LineOptions,
    pub occurred_at: DateTime<Utc>,
}

/// Event: QuantityChanged. `quantity` is the new line quantity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuantityChanged {
    pub cart_id: CartId,
    pub product_id: ProductId,
    #[serde(default)]
    pub options: LineOptions,
    pub quantity: u32,
    pub occurred_at: DateTime<Utc>,
}

/// Event: ItemRemoved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemRemoved {
    pub cart_id: CartId,
    pub product_id: ProductId,
    #[serde(default)]
    pub options: LineOptions,
    pub occurred_at: DateTime<Utc>,
}

/// Event: CartCleared.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartCleared {
    pub cart_id: CartId,
    pub occurred_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum CartEvent {
    ItemAdded(ItemAdded),
    QuantityChanged(QuantityChanged),
    ItemRemoved(ItemRemoved),
    CartCleared(CartCleared),
}

impl Event for CartEvent {
    fn event_type(&self) -> &'static str {
        match self {
            CartEvent::ItemAdded(_) => "checkout.cart.item_added",
            CartEvent::QuantityChanged(_) => "checkout.cart.quantity_changed",
            CartEvent::ItemRemoved(_) => "checkout.cart.item_removed",
            CartEvent::CartCleared(_) => "checkout.cart.cleared",
        }
    }

    fn version(&self) -> u32 {
        1
    }

    fn occurred_at(&self) -> DateTime<Utc> {
        match self {
            CartEvent::ItemAdded(e) => e.occurred_at,
            CartEvent::QuantityChanged(e) => e.occurred_at,
            CartEvent::ItemRemoved(e) => e.occurred_at,
            CartEvent::CartCleared(e) => e.occurred_at,
        }
    }
}

impl Aggregate for Cart {
    type Command = CartCommand;
    type Event = CartEvent;
    type Error = DomainError;

    fn apply(&mut self, event: &Self::Event) {
        match event {
            CartEvent::ItemAdded(e) => match self.lines.iter_mut().find(|l| l.is(&e.product_id, &e.options)) {
                Some(line) => line.quantity = line.quantity.saturating_add(e.quantity),
                None => self.lines.push(CartLine {
                    product_id: e.product_id.clone(),
                    name: e.name.clone(),
                    unit_price: e.unit_price,
                    quantity: e.quantity,
                    options: e.options.clone(),
                }),
            },
            CartEvent::QuantityChanged(e) => {
                if let Some(line) = self.lines.iter_mut().find(|l| l.is(&e.product_id, &e.options)) {
                    line.quantity = e.quantity;
                }
            }
            CartEvent::ItemRemoved(e) => {
                self.lines.retain(|l| !l.is(&e.product_id, &e.options));
            }
            CartEvent::CartCleared(_) => {
                self.lines.clear();
            }
        }

        // Deterministic version tracking: +1 per applied event.
        self.version += 1;
        self.updated_at = Some(event.occurred_at());
    }

    fn handle(&self, command: &Self::Command) -> Result<Vec<Self::Event>, Self::Error> {
        match command {
            CartCommand::AddItem(cmd) => self.handle_add(cmd),
            CartCommand::ChangeQuantity(cmd) => self.handle_change_quantity(cmd),
            CartCommand::RemoveItem(cmd) => self.handle_remove(cmd),
            CartCommand::ClearCart(cmd) => self.handle_clear(cmd),
        }
    }
}

impl Cart {
    fn ensure_cart_id(&self, cart_id: CartId) -> Result<(), DomainError> {
        if self.id != cart_id {
            return Err(DomainError::invariant("cart_id mismatch"));
        }
        Ok(())
    }

    fn handle_add(&self, cmd: &AddItem) -> Result<Vec<CartEvent>, DomainError> {
        self.ensure_cart_id(cmd.cart_id)?;

        if cmd.quantity == 0 {
            return Err(DomainError::validation("quantity must be at least 1"));
        }
        if cmd.name.trim().is_empty() {
            return Err(DomainError::validation("name cannot be empty"));
        }

        Ok(vec![CartEvent::ItemAdded(ItemAdded {
            cart_id: cmd.cart_id,
            product_id: cmd.product_id.clone(),
            name: cmd.name.clone(),
            unit_price: cmd.unit_price,
            quantity: cmd.quantity,
            options: cmd.options.clone(),
            occurred_at: cmd.occurred_at,
        })])
    }

    fn handle_change_quantity(&self, cmd: &ChangeQuantity) -> Result<Vec<CartEvent>, DomainError> {
        self.ensure_cart_id(cmd.cart_id)?;

        let line = self
            .line(&cmd.product_id, &cmd.options)
            .ok_or_else(DomainError::not_found)?;
        let quantity = cmd.quantity.max(1);
        if line.quantity == quantity {
            return Ok(vec![]);
        }

        Ok(vec![CartEvent::QuantityChanged(QuantityChanged {
            cart_id: cmd.cart_id,
            product_id: cmd.product_id.clone(),
            options: cmd.options.clone(),
            quantity,
            occurred_at: cmd.occurred_at,
        })])
    }

    fn handle_remove(&self, cmd: &RemoveItem) -> Result<Vec<CartEvent>, DomainError> {
        self.ensure_cart_id(cmd.cart_id)?;

        if self.line(&cmd.product_id, &cmd.options).is_none() {
            return Err(DomainError::not_found());
        }

        Ok(vec![CartEvent::ItemRemoved(ItemRemoved {
            cart_id: cmd.cart_id,
            product_id: cmd.product_id.clone(),
            options: cmd.options.clone(),
            occurred_at: cmd.occurred_at,
        })])
    }

    fn handle_clear(&self, cmd: &ClearCart) -> Result<Vec<CartEvent>, DomainError> {
        self.ensure_cart_id(cmd.cart_id)?;

        if self.lines.is_empty() {
            return Err(DomainError::conflict("cart is already empty"));
        }

        Ok(vec![CartEvent::CartCleared(CartCleared {
            cart_id: cmd.cart_id,
            occurred_at: cmd.occurred_at,
        })])
    }
}
