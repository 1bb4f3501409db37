use super::build::*;
use super::{Bounds, ReferenceData};
use crate::country::Country;
use address_types::Coordinates;

pub(super) fn reference_data() -> ReferenceData {
    let regions = vec![
        region(
            "Eastern Cape",
            "EC",
            "Bhisho",
            &["Port Elizabeth", "East London", "Mthatha", "Grahamstown", "Uitenhage"],
            &[(4700, 6499)],
        ),
        region(
            "Free State",
            "FS",
            "Bloemfontein",
            &["Bloemfontein", "Welkom", "Bethlehem", "Kroonstad", "Sasolburg"],
            &[(9300, 9999)],
        ),
        region(
            "Gauteng",
            "GP",
            "Johannesburg",
            &[
                "Johannesburg", "Pretoria", "Soweto", "Centurion", "Sandton",
                "Randburg", "Midrand", "Benoni", "Krugersdorp", "Kempton Park",
            ],
            &[(1400, 1999), (2000, 2199)],
        ),
        region(
            "KwaZulu-Natal",
            "KZN",
            "Pietermaritzburg",
            &[
                "Durban", "Pietermaritzburg", "Newcastle", "Ladysmith", "Richards Bay",
                "Pinetown", "Umlazi", "Chatsworth",
            ],
            &[(2900, 4730)],
        ),
        region(
            "Limpopo",
            "LP",
            "Polokwane",
            &["Polokwane", "Tzaneen", "Louis Trichardt", "Phalaborwa", "Mokopane"],
            &[(600, 999)],
        ),
        region(
            "Mpumalanga",
            "MP",
            "Mbombela",
            &["Mbombela", "Nelspruit", "Emalahleni", "Secunda", "Middelburg", "Standerton"],
            &[(1000, 1399), (2200, 2499)],
        ),
        region(
            "Northern Cape",
            "NC",
            "Kimberley",
            &["Kimberley", "Upington", "Springbok", "De Aar", "Kuruman"],
            &[(8300, 8999)],
        ),
        region(
            "North West",
            "NW",
            "Mahikeng",
            &["Mahikeng", "Rustenburg", "Klerksdorp", "Potchefstroom", "Brits"],
            &[(2500, 2899)],
        ),
        region(
            "Western Cape",
            "WC",
            "Cape Town",
            &[
                "Cape Town", "Stellenbosch", "George", "Paarl", "Worcester",
                "Hermanus", "Knysna", "Mossel Bay", "Somerset West", "Bellville",
            ],
            &[(6500, 8299), (7000, 8099)],
        ),
    ];

    let suburbs = suburbs(&[
        (
            "Cape Town",
            &[
                "Sea Point", "Green Point", "Camps Bay", "Clifton", "Newlands", "Rondebosch",
                "Observatory", "Woodstock", "Salt River", "Mowbray", "Claremont", "Constantia",
                "Tokai", "Bergvliet", "Plumstead", "Wynberg", "Kenilworth", "Hout Bay",
                "Llandudno", "Fish Hoek", "Muizenberg", "Khayelitsha", "Mitchells Plain",
                "Gugulethu", "Langa",
            ],
        ),
        (
            "Johannesburg",
            &[
                "Sandton", "Rosebank", "Melville", "Parktown", "Westcliff", "Houghton", "Illovo",
                "Hyde Park", "Morningside", "Rivonia", "Fourways", "Randburg", "Northcliff",
                "Auckland Park", "Braamfontein", "Hillbrow", "Yeoville", "Alexandra", "Soweto",
                "Lenasia", "Eldorado Park",
            ],
        ),
        (
            "Durban",
            &[
                "Umhlanga", "Morningside", "Musgrave", "Berea", "Glenwood", "Overport",
                "Chatsworth", "Phoenix", "Umlazi", "KwaMashu", "Pinetown", "Westville",
                "Hillcrest", "Kloof", "Gillitts",
            ],
        ),
        (
            "Pretoria",
            &[
                "Brooklyn", "Waterkloof", "Menlo Park", "Lynnwood", "Hatfield", "Arcadia",
                "Sunnyside", "Centurion", "Montana", "Wonderboom", "Gezina", "Menlyn",
                "Garsfontein", "Faerie Glen",
            ],
        ),
        (
            "Port Elizabeth",
            &[
                "Summerstrand", "Humewood", "Walmer", "Mill Park", "Newton Park", "Parsons Hill",
                "Westering", "Lorraine", "Framesby", "Greenacres",
            ],
        ),
        (
            "Bloemfontein",
            &[
                "Westdene", "Universitas", "Langenhoven Park", "Fichardt Park", "Pellissier",
                "Willows", "Dan Pienaar", "Heuwelsig",
            ],
        ),
    ]);

    let abbreviations = abbreviations(&[
        ("st", "street"),
        ("str", "street"),
        ("rd", "road"),
        ("ave", "avenue"),
        ("dr", "drive"),
        ("ln", "lane"),
        ("ct", "court"),
        ("pl", "place"),
        ("blvd", "boulevard"),
        ("cres", "crescent"),
        ("apt", "apartment"),
        ("bldg", "building"),
        ("fl", "floor"),
        ("ste", "suite"),
        ("jhb", "johannesburg"),
        ("pta", "pretoria"),
        ("cpt", "cape town"),
        ("dbn", "durban"),
        ("pe", "port elizabeth"),
        ("oos-kaap", "eastern cape"),
        ("wes-kaap", "western cape"),
        ("noord-kaap", "northern cape"),
    ]);

    let city_coordinates = points(&[
        ("Cape Town", -33.9249, 18.4241),
        ("Johannesburg", -26.2041, 28.0473),
        ("Durban", -29.8587, 31.0218),
        ("Pretoria", -25.7479, 28.2293),
        ("Port Elizabeth", -33.9608, 25.6022),
        ("Bloemfontein", -29.0852, 26.1596),
        ("East London", -33.0153, 27.9116),
        ("Nelspruit", -25.4753, 30.9694),
        ("Mbombela", -25.4753, 30.9694),
        ("Polokwane", -23.9045, 29.4689),
        ("Kimberley", -28.7282, 24.7499),
        ("Mahikeng", -25.8560, 25.6403),
        ("Stellenbosch", -33.9321, 18.8602),
        ("Hermanus", -34.4187, 19.2345),
        ("Soweto", -26.2678, 27.8585),
        ("Sandton", -26.1076, 28.0567),
        ("Randburg", -26.0936, 28.0066),
        ("Pinetown", -29.8149, 30.8717),
        ("Bellville", -33.9004, 18.6278),
    ]);

    let region_coordinates = points(&[
        ("Western Cape", -33.2278, 21.8569),
        ("Gauteng", -26.1076, 28.0567),
        ("KwaZulu-Natal", -28.5306, 30.8958),
        ("Eastern Cape", -32.2968, 26.4194),
        ("Free State", -28.4541, 26.7968),
        ("Mpumalanga", -25.5653, 30.5279),
        ("Limpopo", -23.4013, 29.4179),
        ("North West", -26.6639, 25.2838),
        ("Northern Cape", -29.0467, 22.0247),
    ]);

    assemble_tables(
        Country::SouthAfrica,
        "province",
        4,
        regions,
        Bounds {
            lat_min: -34.83,
            lat_max: -22.13,
            lon_min: 16.45,
            lon_max: 32.89,
        },
        &[
            "Street", "Road", "Avenue", "Drive", "Lane", "Crescent", "Way", "Close", "Place",
            "Boulevard", "Highway", "Freeway",
        ],
        suburbs,
        abbreviations,
        &["South Africa", "RSA", "ZA", "SA"],
        city_coordinates,
        region_coordinates,
        Coordinates::new(-28.4793, 24.6727),
    )
}
