//! Block enumeration and functions to query their metadata state.

pub mod material;
pub mod bound;

// Block specific functions for their metadata.
pub mod sprinkler;


/// Internal macro to easily define blocks registry.
macro_rules! blocks {
    (
        $($ident:ident / $id:literal : $name:literal),* $(,)?
    ) => {

        static NAMES: [&'static str; 256] = {
            let mut arr = [""; 256];
            $(arr[$id as usize] = $name;)*
            arr
        };

        $(pub const $ident: u8 = $id;)*

    };
}

blocks! {
    AIR/0:              "air",
    STONE/1:            "stone",
    GRASS/2:            "grass",
    DIRT/3:             "dirt",
    COBBLESTONE/4:      "cobblestone",
    WOOD/5:             "wood",
    BEDROCK/7:          "bedrock",
    WATER_MOVING/8:     "water_moving",
    WATER_STILL/9:      "water_still",
    LAVA_MOVING/10:     "lava_moving",
    LAVA_STILL/11:      "lava_still",
    SAND/12:            "sand",
    GRAVEL/13:          "gravel",
    GLASS/20:           "glass",
    LAPIS_BLOCK/22:     "lapis_block",
    TALL_GRASS/31:      "tall_grass",
    TORCH/50:           "torch",
    CHEST/54:           "chest",
    SNOW/78:            "snow",
    // Content blocks, outside of the vanilla id range.
    GRAVE/200:          "grave",
    SPRINKLER/201:      "sprinkler",
    AUTO_ENCHANTMENT_TABLE/202: "auto_enchantment_table",
}

/// Find a block name from its id.
#[inline]
pub const fn name(id: u8) -> &'static str {
    NAMES[id as usize]
}

/// Find a block id from its name.
pub fn from_name(name: &str) -> Option<u8> {
    NAMES.iter()
        .position(|&n| !n.is_empty() && n == name)
        .map(|n| n as u8)
}


#[cfg(test)]
mod tests {

    use super::*;

    #[test]
    fn names() {
        assert_eq!(name(GRAVE), "grave");
        assert_eq!(from_name("sprinkler"), Some(SPRINKLER));
        assert_eq!(from_name("dirt"), Some(DIRT));
        assert_eq!(from_name(""), None);
        assert_eq!(from_name("unknown"), None);
    }

}
