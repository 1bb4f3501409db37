use super::build::*;
use super::{Bounds, ReferenceData};
use crate::country::Country;
use address_types::Coordinates;

// Oblasts are listed before the cities of republican significance so that
// "Almaty Region" is tried before the bare "Almaty".
// Hyphenated abbreviations precede their prefixes ("pr-t" before "pr").
// Oblast aliases stay qualified with "Oblast" or "Region": a bare "Zhambyl"
// or "Zhetysu" is usually a street or microdistrict.
pub(super) fn reference_data() -> ReferenceData {
    let regions = vec![
        with_aliases(
            region(
                "Akmola Region",
                "AKM",
                "Kokshetau",
                &["Kokshetau", "Stepnogorsk", "Shchuchinsk", "Atbasar"],
                &[(20000, 20999)],
            ),
            &["Akmola Oblast", "Akmolinskaya"],
        ),
        with_aliases(
            region(
                "Aktobe Region",
                "AKT",
                "Aktobe",
                &["Aktobe", "Khromtau", "Kandyagash"],
                &[(30000, 30999)],
            ),
            &["Aktobe Oblast", "Aktyubinskaya"],
        ),
        with_aliases(
            region(
                "Almaty Region",
                "ALM",
                "Qonayev",
                &["Qonayev", "Kaskelen", "Talgar", "Esik"],
                &[(40000, 40999)],
            ),
            &["Almaty Oblast", "Almatinskaya"],
        ),
        with_aliases(
            region(
                "Atyrau Region",
                "ATY",
                "Atyrau",
                &["Atyrau", "Kulsary"],
                &[(60000, 60999)],
            ),
            &["Atyrau Oblast", "Atyrauskaya"],
        ),
        with_aliases(
            region(
                "East Kazakhstan Region",
                "VOS",
                "Oskemen",
                &["Oskemen", "Ust-Kamenogorsk", "Ridder", "Altai"],
                &[(70000, 70999)],
            ),
            &["East Kazakhstan Oblast", "East Kazakhstan", "Vostochno-Kazakhstanskaya"],
        ),
        with_aliases(
            region(
                "Jambyl Region",
                "ZHA",
                "Taraz",
                &["Taraz", "Karatau", "Zhanatas"],
                &[(80000, 80999)],
            ),
            &["Jambyl Oblast", "Zhambyl Oblast", "Zhambyl Region", "Zhambylskaya"],
        ),
        with_aliases(
            region(
                "West Kazakhstan Region",
                "ZAP",
                "Oral",
                &["Oral", "Uralsk", "Aksai"],
                &[(90000, 90999)],
            ),
            &["West Kazakhstan Oblast", "West Kazakhstan", "Zapadno-Kazakhstanskaya"],
        ),
        with_aliases(
            region(
                "Karaganda Region",
                "KAR",
                "Karaganda",
                &["Karaganda", "Temirtau", "Balkhash", "Shakhtinsk"],
                &[(100000, 100999)],
            ),
            &["Karaganda Oblast", "Karagandinskaya"],
        ),
        with_aliases(
            region(
                "Kostanay Region",
                "KUS",
                "Kostanay",
                &["Kostanay", "Rudny", "Lisakovsk", "Arkalyk"],
                &[(110000, 110999)],
            ),
            &["Kostanay Oblast", "Kostanayskaya"],
        ),
        with_aliases(
            region(
                "Kyzylorda Region",
                "KZY",
                "Kyzylorda",
                &["Kyzylorda", "Baikonur", "Aralsk"],
                &[(120000, 120999)],
            ),
            &["Kyzylorda Oblast", "Kyzylordinskaya"],
        ),
        with_aliases(
            region(
                "Mangystau Region",
                "MAN",
                "Aktau",
                &["Aktau", "Zhanaozen"],
                &[(130000, 130999)],
            ),
            &["Mangystau Oblast", "Mangistauskaya"],
        ),
        with_aliases(
            region(
                "Pavlodar Region",
                "PAV",
                "Pavlodar",
                &["Pavlodar", "Ekibastuz", "Aksu"],
                &[(140000, 140999)],
            ),
            &["Pavlodar Oblast", "Pavlodarskaya"],
        ),
        with_aliases(
            region(
                "North Kazakhstan Region",
                "SEV",
                "Petropavl",
                &["Petropavl", "Petropavlovsk", "Bulaevo"],
                &[(150000, 150999)],
            ),
            &["North Kazakhstan Oblast", "North Kazakhstan", "Severo-Kazakhstanskaya"],
        ),
        with_aliases(
            region(
                "Turkistan Region",
                "YUZ",
                "Turkestan",
                &["Turkestan", "Kentau", "Saryagash"],
                &[(160000, 160999)],
            ),
            &["Turkistan Oblast", "Turkestanskaya"],
        ),
        with_aliases(
            region(
                "Abai Region",
                "ABY",
                "Semey",
                &["Semey", "Kurchatov", "Ayagoz"],
                &[(70000, 71999)],
            ),
            &["Abai Oblast", "Abayskaya"],
        ),
        with_aliases(
            region(
                "Ulytau Region",
                "ULT",
                "Jezkazgan",
                &["Jezkazgan", "Zhezkazgan", "Satbayev", "Karazhal"],
                &[(100000, 100999)],
            ),
            &["Ulytau Oblast", "Ulytauskaya"],
        ),
        with_aliases(
            region(
                "Jetisu Region",
                "ZHT",
                "Taldykorgan",
                &["Taldykorgan", "Tekeli", "Zharkent"],
                &[(40000, 40999)],
            ),
            &["Jetisu Oblast", "Zhetysu Region", "Zhetysu Oblast"],
        ),
        with_aliases(
            region("Astana", "AST", "Astana", &["Astana"], &[(10000, 10999)]),
            &["Nur-Sultan"],
        ),
        with_aliases(
            region("Almaty", "ALA", "Almaty", &["Almaty"], &[(50000, 50999)]),
            &["Alma-Ata"],
        ),
        with_aliases(
            region("Shymkent", "SHY", "Shymkent", &["Shymkent"], &[(160000, 160999)]),
            &["Chimkent"],
        ),
    ];

    let suburbs = suburbs(&[
        (
            "Almaty",
            &["Samal", "Orbita", "Mamyr", "Koktem", "Tastak", "Almagul", "Kalkaman"],
        ),
        ("Astana", &["Esil", "Saryarka", "Nura", "Koktal", "Baiterek"]),
        ("Shymkent", &["Al-Farabi", "Enbekshi", "Tauke Khan"]),
        ("Karaganda", &["Maikuduk", "Yugo-Vostok", "Prishakhtinsk"]),
    ]);

    let abbreviations = abbreviations(&[
        ("ul", "ulitsa"),
        ("pr-kt", "prospekt"),
        ("pr-t", "prospekt"),
        ("pr", "prospekt"),
        ("per", "pereulok"),
        ("b-r", "bulvar"),
        ("mkr", "microdistrict"),
        ("m-n", "microdistrict"),
        ("kv", "apartment"),
        ("apt", "apartment"),
        ("obl", "oblast"),
        ("r-n", "district"),
        ("st", "street"),
        ("ave", "avenue"),
    ]);

    let city_coordinates = points(&[
        ("Almaty", 43.2220, 76.8512),
        ("Astana", 51.1605, 71.4704),
        ("Shymkent", 42.3417, 69.5967),
        ("Karaganda", 49.8047, 73.1094),
        ("Aktobe", 50.2839, 57.1670),
        ("Taraz", 42.9000, 71.3667),
        ("Pavlodar", 52.2873, 76.9674),
        ("Oskemen", 49.9480, 82.6286),
        ("Semey", 50.4111, 80.2275),
        ("Atyrau", 46.8067, 51.8750),
        ("Kostanay", 53.2198, 63.6354),
        ("Oral", 51.2333, 51.3667),
        ("Petropavl", 54.8667, 69.1500),
        ("Aktau", 43.6500, 51.1500),
        ("Taldykorgan", 45.0000, 78.3667),
    ]);

    let region_coordinates = points(&[
        ("Akmola Region", 51.9160, 69.4110),
        ("Aktobe Region", 48.7797, 57.9974),
        ("Almaty Region", 44.0000, 77.0000),
        ("Atyrau Region", 47.1076, 51.9141),
        ("East Kazakhstan Region", 48.7063, 83.5000),
        ("Jambyl Region", 44.2220, 72.3658),
        ("West Kazakhstan Region", 49.5680, 50.8067),
        ("Karaganda Region", 47.9022, 71.7700),
        ("Kostanay Region", 51.5077, 64.0479),
        ("Kyzylorda Region", 44.6923, 62.6572),
        ("Mangystau Region", 44.5908, 53.8500),
        ("Pavlodar Region", 52.2870, 76.9674),
        ("North Kazakhstan Region", 54.1620, 69.9380),
        ("Turkistan Region", 43.3667, 68.4094),
        ("Abai Region", 48.9500, 79.5000),
        ("Ulytau Region", 47.8000, 67.0000),
        ("Jetisu Region", 45.0000, 79.0000),
        ("Astana", 51.1605, 71.4704),
        ("Almaty", 43.2220, 76.8512),
        ("Shymkent", 42.3417, 69.5967),
    ]);

    assemble_tables(
        Country::Kazakhstan,
        "oblast",
        6,
        regions,
        Bounds {
            lat_min: 40.56,
            lat_max: 55.45,
            lon_min: 46.49,
            lon_max: 87.31,
        },
        &[
            "Street", "Avenue", "Lane", "Boulevard", "Highway", "Square", "Embankment",
            "Ulitsa", "Prospekt", "Pereulok", "Bulvar", "Shosse", "Microdistrict",
        ],
        suburbs,
        abbreviations,
        &["Republic of Kazakhstan", "Kazakhstan", "KZ", "KAZ"],
        city_coordinates,
        region_coordinates,
        Coordinates::new(48.0196, 66.9237),
    )
}
