//! Descriptors of the auto enchantment table screen. Nothing is rendered here, the
//! descriptors are the data a client needs to lay the screen out, and the screen's
//! input handlers turn clicks into [`LevelChanger`] requests.

use std::marker::PhantomData;
use std::fmt;

use crate::item::{self, ItemStack};

use super::xp::{self, MAX_STORED_LEVELS};
use super::{Level, AutoSlot, LevelChanger, MIN_POWER_LIMIT, MAX_POWER_LIMIT};


/// Sheet of the vanilla enchanting table screen, used for level icons.
pub const ENCHANTING_TABLE_TEXTURE: &str = "textures/gui/container/enchanting_table.png";


/// Error returned when a variant table is built without a descriptor for some variant.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("Unhandled variant: {0}")]
pub struct UnhandledVariant(pub String);


/// An enumeration whose variants can be used as keys of a [`VariantTable`].
pub trait Variant: Copy + fmt::Debug + 'static {

    /// All variants, in index order.
    const ALL: &'static [Self];

    /// Index of this variant in [`Self::ALL`].
    fn index(self) -> usize;

}

impl Variant for Level {
    const ALL: &'static [Self] = &Level::ALL;
    fn index(self) -> usize {
        Level::index(self)
    }
}

impl Variant for AutoSlot {
    const ALL: &'static [Self] = &AutoSlot::ALL;
    fn index(self) -> usize {
        self as usize
    }
}


/// A table mapping each variant of an enumeration to a descriptor. The table is known
/// to be exhaustive once built, so getting a descriptor never fails.
#[derive(Debug, Clone)]
pub struct VariantTable<V: Variant, D> {
    descriptors: Box<[D]>,
    _variant: PhantomData<V>,
}

impl<V: Variant, D> VariantTable<V, D> {

    /// Build a table from pairs of variant and descriptor. If a variant is given more
    /// than once, its last descriptor is kept. If any variant has no descriptor, the
    /// first one missing is returned as an error.
    pub fn build(entries: impl IntoIterator<Item = (V, D)>) -> Result<Self, UnhandledVariant> {

        let mut descriptors = V::ALL.iter().map(|_| None).collect::<Vec<Option<D>>>();
        for (variant, descriptor) in entries {
            descriptors[variant.index()] = Some(descriptor);
        }

        let descriptors = descriptors.into_iter()
            .zip(V::ALL)
            .map(|(descriptor, variant)| descriptor.ok_or_else(|| UnhandledVariant(format!("{variant:?}"))))
            .collect::<Result<Vec<D>, _>>()?;

        Ok(Self { descriptors: descriptors.into_boxed_slice(), _variant: PhantomData })

    }

    /// Get the descriptor of a variant.
    #[inline]
    pub fn get(&self, variant: V) -> &D {
        &self.descriptors[variant.index()]
    }

    /// Iterate over all variants and their descriptor, in index order.
    pub fn iter(&self) -> impl Iterator<Item = (V, &D)> + '_ {
        V::ALL.iter().copied().zip(self.descriptors.iter())
    }

}


/// An icon cut from a texture sheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Icon {
    pub texture: &'static str,
    pub u: u32,
    pub v: u32,
    pub width: u32,
    pub height: u32,
}

/// Standard colors of the screens' tabs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Palette {
    Blue,
    LightBlue,
    Green,
}

impl Palette {

    /// RGB color of this palette entry.
    pub fn color(self) -> u32 {
        match self {
            Palette::Blue => 0x8784C8,
            Palette::LightBlue => 0x84C7C8,
            Palette::Green => 0x84C884,
        }
    }

}

/// A side tab used to configure an [`AutoSlot`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tab {
    pub palette: Palette,
    /// The item stack rendered as the tab icon.
    pub icon: ItemStack,
    /// The icon is rendered with the enchantment glint.
    pub glint: bool,
    pub width: u32,
    pub height: u32,
}

impl Tab {

    fn new(palette: Palette, icon: ItemStack) -> Self {
        Self { palette, icon, glint: false, width: 100, height: 100 }
    }

    fn with_glint(mut self) -> Self {
        self.glint = true;
        self
    }

}

/// A translated text label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Label {
    pub x: u32,
    pub y: u32,
    /// Translation key of the text.
    pub key: &'static str,
}

/// Horizontal slider selecting an integer value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Slider {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub min: f64,
    pub max: f64,
    pub step: f64,
    pub key: &'static str,
}

/// Vertical gauge displaying the level of a tank.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TankGauge {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
    /// Value displayed when the gauge is full.
    pub capacity: u32,
}


/// Layout of the auto enchantment table screen.
#[derive(Debug, Clone)]
pub struct AutoEnchantmentTableGui {
    pub width: u32,
    pub height: u32,
    pub title_key: &'static str,
    /// Icons of the level toggle button, one per level.
    pub level_icons: VariantTable<Level, Icon>,
    /// Position of the level toggle button.
    pub level_button: (u32, u32),
    /// Side tabs configuring each auto slot.
    pub tabs: VariantTable<AutoSlot, Tab>,
    /// Label shown in each auto slot's tab.
    pub labels: VariantTable<AutoSlot, Label>,
    pub power_slider: Slider,
    /// Label of the available power, formatted with the power value.
    pub power_label: Label,
    pub tank_gauge: TankGauge,
}

impl AutoEnchantmentTableGui {

    pub fn new() -> Result<Self, UnhandledVariant> {

        let level_icons = VariantTable::build(Level::ALL.map(|level| {
            (level, Icon {
                texture: ENCHANTING_TABLE_TEXTURE,
                u: 16 * level.index() as u32,
                v: 223,
                width: 16,
                height: 16,
            })
        }))?;

        let pickaxe = ItemStack::new(item::DIAMOND_PICKAXE, 0);
        let tabs = VariantTable::build([
            (AutoSlot::ToolInput, Tab::new(Palette::Blue, pickaxe)),
            (AutoSlot::LapisInput, Tab::new(Palette::Blue, ItemStack::new(item::DYE, item::DYE_LAPIS))),
            (AutoSlot::Output, Tab::new(Palette::LightBlue, pickaxe).with_glint()),
            (AutoSlot::Xp, Tab::new(Palette::Green, ItemStack::new(item::BUCKET, 0))),
        ])?;

        let label = |key| Label { x: 22, y: 82, key };
        let labels = VariantTable::build([
            (AutoSlot::ToolInput, label("openvox.gui.autoextract")),
            (AutoSlot::LapisInput, label("openvox.gui.autoextract")),
            (AutoSlot::Output, label("openvox.gui.autoeject")),
            (AutoSlot::Xp, label("openvox.gui.autodrink")),
        ])?;

        Ok(Self {
            width: 176,
            height: 175,
            title_key: "openvox.gui.autoenchantmenttable",
            level_icons,
            level_button: (16, 60),
            tabs,
            labels,
            power_slider: Slider {
                x: 44,
                y: 39,
                width: 45,
                min: MIN_POWER_LIMIT as f64,
                max: MAX_POWER_LIMIT as f64,
                step: 1.0,
                key: "openvox.gui.limit",
            },
            power_label: Label { x: 40, y: 25, key: "openvox.gui.available_power" },
            tank_gauge: TankGauge { x: 140, y: 30, width: 17, height: 37, capacity: MAX_STORED_LEVELS },
        })

    }

    /// The configurable slots, in display order.
    pub fn slots(&self) -> &'static [AutoSlot] {
        &AutoSlot::ALL
    }

    /// The value displayed by the tank gauge for the given amount of liquid, this is
    /// the level reached with the experience held by the liquid.
    pub fn tank_display_value(&self, liquid: u32) -> u32 {
        xp::get_level_for_experience(xp::liquid_to_xp(liquid))
    }

    /// Handle the power slider being moved to the given value.
    pub fn on_power_slider_changed(&self, value: f64, changer: &mut impl LevelChanger) {
        changer.change_power_limit(value as i32);
    }

    /// Handle a click on the level toggle button, requesting the level after the 
    /// currently selected one.
    pub fn on_level_button_clicked(&self, current: Level, changer: &mut impl LevelChanger) {
        changer.change_level(current.next());
    }

}


#[cfg(test)]
mod tests {

    use crate::enchant::{LevelChangeQueue, LevelChangeRequest};
    use super::*;

    #[test]
    fn exhaustive_table() {

        let err = VariantTable::<AutoSlot, u32>::build([
            (AutoSlot::ToolInput, 0),
            (AutoSlot::LapisInput, 1),
            (AutoSlot::Output, 3),
        ]).unwrap_err();
        assert_eq!(err, UnhandledVariant("Xp".to_string()));

        let table = VariantTable::<AutoSlot, u32>::build([
            (AutoSlot::Output, 3),
            (AutoSlot::Xp, 2),
            (AutoSlot::LapisInput, 1),
            (AutoSlot::ToolInput, 0),
        ]).unwrap();
        assert_eq!(*table.get(AutoSlot::Xp), 2);
        assert_eq!(table.iter().map(|(_, &d)| d).collect::<Vec<_>>(), [0, 1, 2, 3]);

    }

    #[test]
    fn layout() {

        let gui = AutoEnchantmentTableGui::new().unwrap();
        assert_eq!(gui.slots(), [AutoSlot::ToolInput, AutoSlot::LapisInput, AutoSlot::Xp, AutoSlot::Output]);

        let icon = gui.level_icons.get(Level::L3);
        assert_eq!((icon.u, icon.v, icon.width, icon.height), (32, 223, 16, 16));
        assert_eq!(icon.texture, ENCHANTING_TABLE_TEXTURE);

        let lapis = gui.tabs.get(AutoSlot::LapisInput);
        assert_eq!(lapis.palette, Palette::Blue);
        assert_eq!(lapis.icon, ItemStack::new(item::DYE, item::DYE_LAPIS));
        assert!(gui.tabs.get(AutoSlot::Output).glint);
        assert_eq!(gui.tabs.get(AutoSlot::Xp).icon.id, item::BUCKET);

        assert_eq!(gui.labels.get(AutoSlot::ToolInput).key, gui.labels.get(AutoSlot::LapisInput).key);
        assert_eq!(gui.labels.get(AutoSlot::Xp).key, "openvox.gui.autodrink");

    }

    #[test]
    fn tank_shows_levels() {
        let gui = AutoEnchantmentTableGui::new().unwrap();
        assert_eq!(gui.tank_display_value(0), 0);
        assert_eq!(gui.tank_display_value(xp::xp_to_liquid(7)), 1);
        assert_eq!(gui.tank_display_value(xp::tank_capacity()), MAX_STORED_LEVELS);
    }

    #[test]
    fn input_requests() {

        let gui = AutoEnchantmentTableGui::new().unwrap();
        let mut queue = LevelChangeQueue::default();
        gui.on_power_slider_changed(17.0, &mut queue);
        gui.on_level_button_clicked(Level::L3, &mut queue);

        assert_eq!(queue.take_requests(), [LevelChangeRequest::PowerLimit(17), LevelChangeRequest::Level(Level::L1)]);

    }

}
