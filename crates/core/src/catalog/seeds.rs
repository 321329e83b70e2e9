//! Seed listings the synthesizer recombines.
//!
//! Only four rooms carry seed items; the others are served from a
//! cross-room sample.

use rust_decimal::Decimal;

use crate::domain::listing::{Color, ProductListing, Room, Source, Style};

#[derive(Debug, Clone, Copy)]
pub struct SeedListing {
    pub title: &'static str,
    /// Whole dollars.
    pub price: i64,
    pub url: &'static str,
    pub image_url: &'static str,
    pub source: Source,
    pub room: Room,
    pub category: &'static str,
    pub color: Color,
    pub style: Style,
}

pub const SEED_LISTINGS: &[SeedListing] = &[
    SeedListing {
        title: "MALM Bed Frame, High w/Storage, White",
        price: 399,
        url: "https://www.ikea.com/us/en/p/malm-bed-frame-high-storage-white-luroey-s19931613/",
        image_url: "https://www.ikea.com/us/en/images/products/malm-bed-frame-high-storage-white-luroey__0976653_pe854858_s5.jpg",
        source: Source::Ikea,
        room: Room::Bedroom,
        category: "Bed",
        color: Color::White,
        style: Style::Minimalist,
    },
    SeedListing {
        title: "HEMNES Nightstand, Black-Brown",
        price: 99,
        url: "https://www.ikea.com/us/en/p/hemnes-nightstand-black-brown-00392207/",
        image_url: "https://www.ikea.com/us/en/images/products/hemnes-nightstand-black-brown__0039221_pe774446_s5.jpg",
        source: Source::Ikea,
        room: Room::Bedroom,
        category: "Table",
        color: Color::Wood,
        style: Style::Modern,
    },
    SeedListing {
        title: "IDANÄS Dresser, White",
        price: 249,
        url: "https://www.ikea.com/us/en/p/idaenas-dresser-white-s89420991/",
        image_url: "https://www.ikea.com/us/en/images/products/idaenas-dresser-white__0778453_pe819885_s5.jpg",
        source: Source::Ikea,
        room: Room::Bedroom,
        category: "Dresser",
        color: Color::White,
        style: Style::Minimalist,
    },
    SeedListing {
        title: "KALLAX Shelf Unit, White",
        price: 49,
        url: "https://www.ikea.com/us/en/p/kallax-shelf-unit-white-80275840/",
        image_url: "https://www.ikea.com/us/en/images/products/kallax-shelf-unit-white__00294300_pe554620_s5.jpg",
        source: Source::Ikea,
        room: Room::Bedroom,
        category: "Shelf",
        color: Color::White,
        style: Style::Modern,
    },
    SeedListing {
        title: "PAX Wardrobe, White",
        price: 299,
        url: "https://www.ikea.com/us/en/p/pax-wardrobe-white-s69280348/",
        image_url: "https://www.ikea.com/us/en/images/products/pax-wardrobe-white__0738028_pe774447_s5.jpg",
        source: Source::Ikea,
        room: Room::Bedroom,
        category: "Wardrobe",
        color: Color::White,
        style: Style::Minimalist,
    },
    SeedListing {
        title: "EKET Cabinet w/Glass Door, White",
        price: 79,
        url: "https://www.ikea.com/us/en/p/eket-cabinet-w-glass-door-white-s49428252/",
        image_url: "https://www.ikea.com/us/en/images/products/eket-cabinet-w-glass-door-white__0638952_pe774448_s5.jpg",
        source: Source::Ikea,
        room: Room::LivingRoom,
        category: "Cabinet",
        color: Color::White,
        style: Style::Modern,
    },
    SeedListing {
        title: "KLIPPAN Sofa, Three-Seat, Gunnared Medium Gray",
        price: 249,
        url: "https://www.ikea.com/us/en/p/klippan-sofa-three-seat-gunnared-medium-gray-s69294468/",
        image_url: "https://www.ikea.com/us/en/images/products/klippan-sofa-three-seat-gunnared-medium-gray__0789447_pe774449_s5.jpg",
        source: Source::Ikea,
        room: Room::LivingRoom,
        category: "Sofa",
        color: Color::Gray,
        style: Style::Minimalist,
    },
    SeedListing {
        title: "LACK Coffee Table, Black-Brown",
        price: 15,
        url: "https://www.ikea.com/us/en/p/lack-coffee-table-black-brown-90449993/",
        image_url: "https://www.ikea.com/us/en/images/products/lack-coffee-table-black-brown__0044999_pe554621_s5.jpg",
        source: Source::Ikea,
        room: Room::LivingRoom,
        category: "Table",
        color: Color::Wood,
        style: Style::Modern,
    },
    SeedListing {
        title: "STRANDMON Wing Chair, Eksarp Black/Black",
        price: 399,
        url: "https://www.ikea.com/us/en/p/strandmon-wing-chair-eksarp-black-black-s99429413/",
        image_url: "https://www.ikea.com/us/en/images/products/strandmon-wing-chair-eksarp-black-black__0692942_pe774450_s5.jpg",
        source: Source::Ikea,
        room: Room::LivingRoom,
        category: "Chair",
        color: Color::Black,
        style: Style::Boho,
    },
    SeedListing {
        title: "BILLY Bookcase, White",
        price: 59,
        url: "https://www.ikea.com/us/en/p/billy-bookcase-white-00263851/",
        image_url: "https://www.ikea.com/us/en/images/products/billy-bookcase-white__0026385_pe554622_s5.jpg",
        source: Source::Ikea,
        room: Room::LivingRoom,
        category: "Shelf",
        color: Color::White,
        style: Style::Minimalist,
    },
    SeedListing {
        title: "EKBACKEN Countertop, White Laminate",
        price: 89,
        url: "https://www.ikea.com/us/en/p/ekbacken-countertop-white-laminate-10403200/",
        image_url: "https://www.ikea.com/us/en/images/products/ekbacken-countertop-white-laminate__0403200_pe774451_s5.jpg",
        source: Source::Ikea,
        room: Room::Kitchen,
        category: "Table",
        color: Color::White,
        style: Style::Modern,
    },
    SeedListing {
        title: "VARIERA Insert Drawer, White",
        price: 9,
        url: "https://www.ikea.com/us/en/p/variera-insert-drawer-white-80214529/",
        image_url: "https://www.ikea.com/us/en/images/products/variera-insert-drawer-white__0214529_pe554623_s5.jpg",
        source: Source::Ikea,
        room: Room::Kitchen,
        category: "Cabinet",
        color: Color::White,
        style: Style::Minimalist,
    },
    SeedListing {
        title: "TONSTAD Stool, Black",
        price: 25,
        url: "https://www.ikea.com/us/en/p/tonstad-stool-black-00495823/",
        image_url: "https://www.ikea.com/us/en/images/products/tonstad-stool-black__0495823_pe774452_s5.jpg",
        source: Source::Ikea,
        room: Room::Kitchen,
        category: "Stool",
        color: Color::Black,
        style: Style::Modern,
    },
    SeedListing {
        title: "ENHET Cabinet w/Shelf, White",
        price: 129,
        url: "https://www.ikea.com/us/en/p/enhet-cabinet-w-shelf-white-s79428782/",
        image_url: "https://www.ikea.com/us/en/images/products/enhet-cabinet-w-shelf-white__0428782_pe774453_s5.jpg",
        source: Source::Ikea,
        room: Room::Bathroom,
        category: "Cabinet",
        color: Color::White,
        style: Style::Minimalist,
    },
    SeedListing {
        title: "GODMORGON Cabinet w/Sink, White",
        price: 299,
        url: "https://www.ikea.com/us/en/p/godmorgon-cabinet-w-sink-white-s89428992/",
        image_url: "https://www.ikea.com/us/en/images/products/godmorgon-cabinet-w-sink-white__0428992_pe774454_s5.jpg",
        source: Source::Ikea,
        room: Room::Bathroom,
        category: "Vanity",
        color: Color::White,
        style: Style::Modern,
    },
    SeedListing {
        title: "Zinus 14 Inch SmartBase Mattress Foundation / Bed Frame / Platform, Queen, Black",
        price: 139,
        url: "https://www.amazon.com/Zinus-Mattress-Foundation-Platform-Headboard/dp/B07D4M7Y9K",
        image_url: "https://m.media-amazon.com/images/I/71v+U8uV7QL._AC_SL1500_.jpg",
        source: Source::Amazon,
        room: Room::Bedroom,
        category: "Bed",
        color: Color::Black,
        style: Style::Minimalist,
    },
    SeedListing {
        title: "Amazon Basics Mid-Century 6-Drawer Dresser, Walnut",
        price: 189,
        url: "https://www.amazon.com/Amazon-Basics-Mid-Century-6-Drawer-Dresser/dp/B07PBF5Z3P",
        image_url: "https://m.media-amazon.com/images/I/81o7+4qW+CL._AC_SL1500_.jpg",
        source: Source::Amazon,
        room: Room::Bedroom,
        category: "Dresser",
        color: Color::Wood,
        style: Style::Modern,
    },
    SeedListing {
        title: "Walker Edison Mid Century Modern Wood Nightstand, 20 Inch, Walnut",
        price: 89,
        url: "https://www.amazon.com/Walker-Edison-Furniture-Company-Nightstand/dp/B07H8J4Q5R",
        image_url: "https://m.media-amazon.com/images/I/71z3p9zqXBL._AC_SL1500_.jpg",
        source: Source::Amazon,
        room: Room::Bedroom,
        category: "Table",
        color: Color::Wood,
        style: Style::Boho,
    },
    SeedListing {
        title: "Mainstays Parsons End Table with Drawer, Multiple Colors, Black",
        price: 45,
        url: "https://www.amazon.com/Mainstays-Parsons-Table-Drawer-Multiple/dp/B07H8J4Q5S",
        image_url: "https://m.media-amazon.com/images/I/71kL0zQbJEL._AC_SL1500_.jpg",
        source: Source::Amazon,
        room: Room::Bedroom,
        category: "Table",
        color: Color::Black,
        style: Style::Minimalist,
    },
    SeedListing {
        title: "Sauder Harbor View Storage Cabinet, Antique White",
        price: 129,
        url: "https://www.amazon.com/Sauder-Harbor-View-Storage-Cabinet/dp/B000N5T4Z2",
        image_url: "https://m.media-amazon.com/images/I/71f5z5z5z5L._AC_SL1500_.jpg",
        source: Source::Amazon,
        room: Room::Bedroom,
        category: "Cabinet",
        color: Color::White,
        style: Style::Modern,
    },
    SeedListing {
        title: "Amazon Basics Puresoft Home Office Desk Chair, Black",
        price: 99,
        url: "https://www.amazon.com/AmazonBasics-Puresoft-Office-Desk-Chair/dp/B07Z8F5Z5Z",
        image_url: "https://m.media-amazon.com/images/I/81J5J5J5J5L._AC_SL1500_.jpg",
        source: Source::Amazon,
        room: Room::LivingRoom,
        category: "Chair",
        color: Color::Black,
        style: Style::Minimalist,
    },
    SeedListing {
        title: "ZINUS Wan 70x70 Inch Square Coffee Table, Black",
        price: 89,
        url: "https://www.amazon.com/Zinus-Wan-Square-Coffee-Table/dp/B08L5L5L5L",
        image_url: "https://m.media-amazon.com/images/I/71m5m5m5m5L._AC_SL1500_.jpg",
        source: Source::Amazon,
        room: Room::LivingRoom,
        category: "Table",
        color: Color::Black,
        style: Style::Modern,
    },
    SeedListing {
        title: "Sauder Cannery Bridge L-Shaped Desk, Charter Oak",
        price: 199,
        url: "https://www.amazon.com/Sauder-Cannery-Bridge-L-Shaped-Desk/dp/B07PBF5Z3Q",
        image_url: "https://m.media-amazon.com/images/I/81n6n6n6n6L._AC_SL1500_.jpg",
        source: Source::Amazon,
        room: Room::LivingRoom,
        category: "Desk",
        color: Color::Wood,
        style: Style::Boho,
    },
    SeedListing {
        title: "Walker Edison Modern Farmhouse Entryway TV Stand, 44 Inch, Grey Wash",
        price: 149,
        url: "https://www.amazon.com/Walker-Edison-Furniture-Company-44-Inch/dp/B07H8J4Q5T",
        image_url: "https://m.media-amazon.com/images/I/71p7p7p7p7L._AC_SL1500_.jpg",
        source: Source::Amazon,
        room: Room::LivingRoom,
        category: "TV Stand",
        color: Color::Gray,
        style: Style::Modern,
    },
    SeedListing {
        title: "Amazon Basics 5-Shelf Shelving Unit, Chrome",
        price: 59,
        url: "https://www.amazon.com/AmazonBasics-5-Shelf-Shelving-Unit-Chrome/dp/B07Z8F5Z5A",
        image_url: "https://m.media-amazon.com/images/I/81q8q8q8q8L._AC_SL1500_.jpg",
        source: Source::Amazon,
        room: Room::LivingRoom,
        category: "Shelf",
        color: Color::Gray,
        style: Style::Minimalist,
    },
    SeedListing {
        title: "Amazon Basics 4-Piece Wood Slice Serving Set",
        price: 15,
        url: "https://www.amazon.com/Amazon-Basics-4-Piece-Serving-Set/dp/B07Z8F5Z5B",
        image_url: "https://m.media-amazon.com/images/I/71r9r9r9r9L._AC_SL1500_.jpg",
        source: Source::Amazon,
        room: Room::Kitchen,
        category: "Table",
        color: Color::Wood,
        style: Style::Boho,
    },
    SeedListing {
        title: "Sauder Beginnings Storage Cabinet, White",
        price: 79,
        url: "https://www.amazon.com/Sauder-Beginnings-Storage-Cabinet-White/dp/B000N5T4Z3",
        image_url: "https://m.media-amazon.com/images/I/71s0s0s0s0L._AC_SL1500_.jpg",
        source: Source::Amazon,
        room: Room::Kitchen,
        category: "Cabinet",
        color: Color::White,
        style: Style::Minimalist,
    },
    SeedListing {
        title: "Mainstays Kitchen Island Cart, Black",
        price: 129,
        url: "https://www.amazon.com/Mainstays-Kitchen-Island-Cart-Black/dp/B07H8J4Q5U",
        image_url: "https://m.media-amazon.com/images/I/81t1t1t1t1L._AC_SL1500_.jpg",
        source: Source::Amazon,
        room: Room::Kitchen,
        category: "Table",
        color: Color::Black,
        style: Style::Modern,
    },
    SeedListing {
        title: "mDesign Plastic Storage Organizer Cabinet for Bathroom, Linen",
        price: 39,
        url: "https://www.amazon.com/mDesign-Plastic-Storage-Organizer-Bathroom/dp/B07Z8F5Z5C",
        image_url: "https://m.media-amazon.com/images/I/71u2u2u2u2L._AC_SL1500_.jpg",
        source: Source::Amazon,
        room: Room::Bathroom,
        category: "Cabinet",
        color: Color::Beige,
        style: Style::Minimalist,
    },
    SeedListing {
        title: "Delta Faucet Trinsic Single Hole Bathroom Vanity Faucet, Chrome",
        price: 99,
        url: "https://www.amazon.com/Delta-Faucet-Trinsic-Bathroom-Vanity/dp/B07PBF5Z3R",
        image_url: "https://m.media-amazon.com/images/I/81v3v3v3v3L._AC_SL1500_.jpg",
        source: Source::Amazon,
        room: Room::Bathroom,
        category: "Vanity",
        color: Color::Gray,
        style: Style::Modern,
    },
    SeedListing {
        title: "Home Centre Enzo Queen Bed with Storage (Honey Finish)",
        price: 450,
        url: "https://www.flipkart.com/home-centre-enzo-queen-bed-storage-honey-finish/p/itmfgzgzgzgzgzgz",
        image_url: "https://rukminim1.flixcart.com/image/400/400/jw1u7m80/bed/qz5/qz5/qz5.jpg",
        source: Source::Flipkart,
        room: Room::Bedroom,
        category: "Bed",
        color: Color::Wood,
        style: Style::Modern,
    },
    SeedListing {
        title: "@home by Nilkamal Aria Bedside Table (Brown)",
        price: 65,
        url: "https://www.flipkart.com/home-nilkamal-aria-bedside-table-brown/p/itmfhzhzhzhzhzhz",
        image_url: "https://rukminim1.flixcart.com/image/400/400/k0u7m80/table/l2p/l2p/l2p.jpg",
        source: Source::Flipkart,
        room: Room::Bedroom,
        category: "Table",
        color: Color::Wood,
        style: Style::Minimalist,
    },
    SeedListing {
        title: "Pepperfry Wooden Wardrobe (Teak Finish)",
        price: 320,
        url: "https://www.flipkart.com/pepperfry-wooden-wardrobe-teak-finish/p/itmxyzxyzxyzxyzx",
        image_url: "https://rukminim1.flixcart.com/image/400/400/jx1u7m80/wardrobe/m3q/m3q/m3q.jpg",
        source: Source::Flipkart,
        room: Room::Bedroom,
        category: "Wardrobe",
        color: Color::Wood,
        style: Style::Boho,
    },
    SeedListing {
        title: "Urban Ladder Sixer Dresser (White)",
        price: 180,
        url: "https://www.flipkart.com/urban-ladder-sixer-dresser-white/p/itmabcabcabcabca",
        image_url: "https://rukminim1.flixcart.com/image/400/400/ku2u7m80/dresser/n4r/n4r/n4r.jpg",
        source: Source::Flipkart,
        room: Room::Bedroom,
        category: "Dresser",
        color: Color::White,
        style: Style::Modern,
    },
    SeedListing {
        title: "Home Centre Shelf Unit (Wenge)",
        price: 85,
        url: "https://www.flipkart.com/home-centre-shelf-unit-wenge/p/itmdefdefdefdefd",
        image_url: "https://rukminim1.flixcart.com/image/400/400/lw3v7m80/shelf/o5s/o5s/o5s.jpg",
        source: Source::Flipkart,
        room: Room::Bedroom,
        category: "Shelf",
        color: Color::Wood,
        style: Style::Minimalist,
    },
    SeedListing {
        title: "Home Centre L-Shaped Sofa (Grey Fabric)",
        price: 550,
        url: "https://www.flipkart.com/home-centre-l-shaped-sofa-grey-fabric/p/itmghiaghiaighia",
        image_url: "https://rukminim1.flixcart.com/image/400/400/mx4w7m80/sofa/p6t/p6t/p6t.jpg",
        source: Source::Flipkart,
        room: Room::LivingRoom,
        category: "Sofa",
        color: Color::Gray,
        style: Style::Modern,
    },
    SeedListing {
        title: "Pepperfry Coffee Table Set (Walnut)",
        price: 120,
        url: "https://www.flipkart.com/pepperfry-coffee-table-set-walnut/p/itmjkljkljkljklj",
        image_url: "https://rukminim1.flixcart.com/image/400/400/ny5x7m80/table/q7u/q7u/q7u.jpg",
        source: Source::Flipkart,
        room: Room::LivingRoom,
        category: "Table",
        color: Color::Wood,
        style: Style::Boho,
    },
    SeedListing {
        title: "Urban Ladder Armchair (Beige)",
        price: 210,
        url: "https://www.flipkart.com/urban-ladder-armchair-beige/p/itmnopnopnopnopn",
        image_url: "https://rukminim1.flixcart.com/image/400/400/oz6y7m80/chair/r8v/r8v/r8v.jpg",
        source: Source::Flipkart,
        room: Room::LivingRoom,
        category: "Chair",
        color: Color::Beige,
        style: Style::Minimalist,
    },
    SeedListing {
        title: "Home Centre TV Unit (Black Gloss)",
        price: 160,
        url: "https://www.flipkart.com/home-centre-tv-unit-black-gloss/p/itmpqrpqrpqrpqrp",
        image_url: "https://rukminim1.flixcart.com/image/400/400/pa7z7m80/tv-stand/s9w/s9w/s9w.jpg",
        source: Source::Flipkart,
        room: Room::LivingRoom,
        category: "TV Stand",
        color: Color::Black,
        style: Style::Modern,
    },
    SeedListing {
        title: "@home by Nilkamal Bookshelf (White)",
        price: 95,
        url: "https://www.flipkart.com/home-nilkamal-bookshelf-white/p/itmstutstutstuts",
        image_url: "https://rukminim1.flixcart.com/image/400/400/qb8a8m80/shelf/t0x/t0x/t0x.jpg",
        source: Source::Flipkart,
        room: Room::LivingRoom,
        category: "Shelf",
        color: Color::White,
        style: Style::Minimalist,
    },
    SeedListing {
        title: "Home Centre Kitchen Trolley (Stainless Steel)",
        price: 75,
        url: "https://www.flipkart.com/home-centre-kitchen-trolley-stainless-steel/p/itmuvuvuvuvuvuvu",
        image_url: "https://rukminim1.flixcart.com/image/400/400/rc9b9m80/trolley/u1y/u1y/u1y.jpg",
        source: Source::Flipkart,
        room: Room::Kitchen,
        category: "Table",
        color: Color::Gray,
        style: Style::Modern,
    },
    SeedListing {
        title: "Pepperfry Modular Cabinet (Brown)",
        price: 140,
        url: "https://www.flipkart.com/pepperfry-modular-cabinet-brown/p/itmvwwwvwvwvvwvw",
        image_url: "https://rukminim1.flixcart.com/image/400/400/sd0c0m80/cabinet/v2z/v2z/v2z.jpg",
        source: Source::Flipkart,
        room: Room::Kitchen,
        category: "Cabinet",
        color: Color::Wood,
        style: Style::Boho,
    },
    SeedListing {
        title: "Urban Ladder Bar Stool (Black Metal)",
        price: 50,
        url: "https://www.flipkart.com/urban-ladder-bar-stool-black-metal/p/itmxxxyyyxyyyxyy",
        image_url: "https://rukminim1.flixcart.com/image/400/400/te1d1m80/stool/w3a/w3a/w3a.jpg",
        source: Source::Flipkart,
        room: Room::Kitchen,
        category: "Stool",
        color: Color::Black,
        style: Style::Minimalist,
    },
    SeedListing {
        title: "Home Centre Vanity Cabinet (White Marble)",
        price: 220,
        url: "https://www.flipkart.com/home-centre-vanity-cabinet-white-marble/p/itmyzzzzaaaazzzza",
        image_url: "https://rukminim1.flixcart.com/image/400/400/uf2e2m80/vanity/x4b/x4b/x4b.jpg",
        source: Source::Flipkart,
        room: Room::Bathroom,
        category: "Vanity",
        color: Color::White,
        style: Style::Modern,
    },
    SeedListing {
        title: "Pepperfry Bathroom Shelf (Chrome)",
        price: 35,
        url: "https://www.flipkart.com/pepperfry-bathroom-shelf-chrome/p/itmbbbbbccccbbbb",
        image_url: "https://rukminim1.flixcart.com/image/400/400/vg3f3m80/shelf/y5c/y5c/y5c.jpg",
        source: Source::Flipkart,
        room: Room::Bathroom,
        category: "Shelf",
        color: Color::Gray,
        style: Style::Minimalist,
    },
];

/// Seeds used for a room with no items of its own.
pub const CROSS_ROOM_SAMPLE_SIZE: usize = 20;

impl SeedListing {
    pub fn to_listing(&self) -> ProductListing {
        ProductListing {
            title: self.title.to_string(),
            price: Decimal::new(self.price, 0),
            url: self.url.to_string(),
            image_url: self.image_url.to_string(),
            source: self.source,
            category: self.category.to_string(),
            room: self.room,
            color: self.color,
            style: self.style,
        }
    }
}

pub fn seeds_for(room: Room) -> Vec<&'static SeedListing> {
    SEED_LISTINGS.iter().filter(|seed| seed.room == room).collect()
}

pub fn cross_room_sample() -> Vec<&'static SeedListing> {
    SEED_LISTINGS.iter().take(CROSS_ROOM_SAMPLE_SIZE).collect()
}
