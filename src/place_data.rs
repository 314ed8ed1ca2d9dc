//! Static reference tables backing place detection.
//!
//! The detector never reads these slices directly at match time; it folds
//! them once into normalized lookup sets (see `place_detect`). An empty
//! string means the code does not exist for that entry.

/// `(name, iso_code, alpha_3, numeric)` per ISO 3166-1.
pub const COUNTRIES: &[(&str, &str, &str, &str)] = &[
    ("Afghanistan", "AF", "AFG", "004"),
    ("Albania", "AL", "ALB", "008"),
    ("Algeria", "DZ", "DZA", "012"),
    ("American Samoa", "AS", "ASM", "016"),
    ("Andorra", "AD", "AND", "020"),
    ("Angola", "AO", "AGO", "024"),
    ("Anguilla", "AI", "AIA", "660"),
    ("Antarctica", "AQ", "ATA", "010"),
    ("Antigua and Barbuda", "AG", "ATG", "028"),
    ("Argentina", "AR", "ARG", "032"),
    ("Armenia", "AM", "ARM", "051"),
    ("Aruba", "AW", "ABW", "533"),
    ("Australia", "AU", "AUS", "036"),
    ("Austria", "AT", "AUT", "040"),
    ("Azerbaijan", "AZ", "AZE", "031"),
    ("Bahamas", "BS", "BHS", "044"),
    ("Bahrain", "BH", "BHR", "048"),
    ("Bangladesh", "BD", "BGD", "050"),
    ("Barbados", "BB", "BRB", "052"),
    ("Belarus", "BY", "BLR", "112"),
    ("Belgium", "BE", "BEL", "056"),
    ("Belize", "BZ", "BLZ", "084"),
    ("Benin", "BJ", "BEN", "204"),
    ("Bermuda", "BM", "BMU", "060"),
    ("Bhutan", "BT", "BTN", "064"),
    ("Bolivia", "BO", "BOL", "068"),
    ("Bosnia and Herzegovina", "BA", "BIH", "070"),
    ("Botswana", "BW", "BWA", "072"),
    ("Brazil", "BR", "BRA", "076"),
    ("British Virgin Islands", "VG", "VGB", "092"),
    ("Brunei Darussalam", "BN", "BRN", "096"),
    ("Bulgaria", "BG", "BGR", "100"),
    ("Burkina Faso", "BF", "BFA", "854"),
    ("Burundi", "BI", "BDI", "108"),
    ("Cabo Verde", "CV", "CPV", "132"),
    ("Cambodia", "KH", "KHM", "116"),
    ("Cameroon", "CM", "CMR", "120"),
    ("Canada", "CA", "CAN", "124"),
    ("Cayman Islands", "KY", "CYM", "136"),
    ("Central African Republic", "CF", "CAF", "140"),
    ("Chad", "TD", "TCD", "148"),
    ("Chile", "CL", "CHL", "152"),
    ("China", "CN", "CHN", "156"),
    ("Colombia", "CO", "COL", "170"),
    ("Comoros", "KM", "COM", "174"),
    ("Congo", "CG", "COG", "178"),
    ("Costa Rica", "CR", "CRI", "188"),
    ("Cote d'Ivoire", "CI", "CIV", "384"),
    ("Croatia", "HR", "HRV", "191"),
    ("Cuba", "CU", "CUB", "192"),
    ("Cyprus", "CY", "CYP", "196"),
    ("Czechia", "CZ", "CZE", "203"),
    ("Democratic Republic of the Congo", "CD", "COD", "180"),
    ("Denmark", "DK", "DNK", "208"),
    ("Djibouti", "DJ", "DJI", "262"),
    ("Dominica", "DM", "DMA", "212"),
    ("Dominican Republic", "DO", "DOM", "214"),
    ("Ecuador", "EC", "ECU", "218"),
    ("Egypt", "EG", "EGY", "818"),
    ("El Salvador", "SV", "SLV", "222"),
    ("Equatorial Guinea", "GQ", "GNQ", "226"),
    ("Eritrea", "ER", "ERI", "232"),
    ("Estonia", "EE", "EST", "233"),
    ("Eswatini", "SZ", "SWZ", "748"),
    ("Ethiopia", "ET", "ETH", "231"),
    ("Fiji", "FJ", "FJI", "242"),
    ("Finland", "FI", "FIN", "246"),
    ("France", "FR", "FRA", "250"),
    ("Gabon", "GA", "GAB", "266"),
    ("Gambia", "GM", "GMB", "270"),
    ("Georgia", "GE", "GEO", "268"),
    ("Germany", "DE", "DEU", "276"),
    ("Ghana", "GH", "GHA", "288"),
    ("Greece", "GR", "GRC", "300"),
    ("Greenland", "GL", "GRL", "304"),
    ("Grenada", "GD", "GRD", "308"),
    ("Guam", "GU", "GUM", "316"),
    ("Guatemala", "GT", "GTM", "320"),
    ("Guinea", "GN", "GIN", "324"),
    ("Guinea-Bissau", "GW", "GNB", "624"),
    ("Guyana", "GY", "GUY", "328"),
    ("Haiti", "HT", "HTI", "332"),
    ("Honduras", "HN", "HND", "340"),
    ("Hong Kong", "HK", "HKG", "344"),
    ("Hungary", "HU", "HUN", "348"),
    ("Iceland", "IS", "ISL", "352"),
    ("India", "IN", "IND", "356"),
    ("Indonesia", "ID", "IDN", "360"),
    ("Iran", "IR", "IRN", "364"),
    ("Iraq", "IQ", "IRQ", "368"),
    ("Ireland", "IE", "IRL", "372"),
    ("Israel", "IL", "ISR", "376"),
    ("Italy", "IT", "ITA", "380"),
    ("Jamaica", "JM", "JAM", "388"),
    ("Japan", "JP", "JPN", "392"),
    ("Jordan", "JO", "JOR", "400"),
    ("Kazakhstan", "KZ", "KAZ", "398"),
    ("Kenya", "KE", "KEN", "404"),
    ("Kiribati", "KI", "KIR", "296"),
    ("Kuwait", "KW", "KWT", "414"),
    ("Kyrgyzstan", "KG", "KGZ", "417"),
    ("Laos", "LA", "LAO", "418"),
    ("Latvia", "LV", "LVA", "428"),
    ("Lebanon", "LB", "LBN", "422"),
    ("Lesotho", "LS", "LSO", "426"),
    ("Liberia", "LR", "LBR", "430"),
    ("Libya", "LY", "LBY", "434"),
    ("Liechtenstein", "LI", "LIE", "438"),
    ("Lithuania", "LT", "LTU", "440"),
    ("Luxembourg", "LU", "LUX", "442"),
    ("Macao", "MO", "MAC", "446"),
    ("Madagascar", "MG", "MDG", "450"),
    ("Malawi", "MW", "MWI", "454"),
    ("Malaysia", "MY", "MYS", "458"),
    ("Maldives", "MV", "MDV", "462"),
    ("Mali", "ML", "MLI", "466"),
    ("Malta", "MT", "MLT", "470"),
    ("Marshall Islands", "MH", "MHL", "584"),
    ("Mauritania", "MR", "MRT", "478"),
    ("Mauritius", "MU", "MUS", "480"),
    ("Mexico", "MX", "MEX", "484"),
    ("Micronesia", "FM", "FSM", "583"),
    ("Moldova", "MD", "MDA", "498"),
    ("Monaco", "MC", "MCO", "492"),
    ("Mongolia", "MN", "MNG", "496"),
    ("Montenegro", "ME", "MNE", "499"),
    ("Morocco", "MA", "MAR", "504"),
    ("Mozambique", "MZ", "MOZ", "508"),
    ("Myanmar", "MM", "MMR", "104"),
    ("Namibia", "NA", "NAM", "516"),
    ("Nauru", "NR", "NRU", "520"),
    ("Nepal", "NP", "NPL", "524"),
    ("Netherlands", "NL", "NLD", "528"),
    ("New Zealand", "NZ", "NZL", "554"),
    ("Nicaragua", "NI", "NIC", "558"),
    ("Niger", "NE", "NER", "562"),
    ("Nigeria", "NG", "NGA", "566"),
    ("North Korea", "KP", "PRK", "408"),
    ("North Macedonia", "MK", "MKD", "807"),
    ("Norway", "NO", "NOR", "578"),
    ("Oman", "OM", "OMN", "512"),
    ("Pakistan", "PK", "PAK", "586"),
    ("Palau", "PW", "PLW", "585"),
    ("Palestine", "PS", "PSE", "275"),
    ("Panama", "PA", "PAN", "591"),
    ("Papua New Guinea", "PG", "PNG", "598"),
    ("Paraguay", "PY", "PRY", "600"),
    ("Peru", "PE", "PER", "604"),
    ("Philippines", "PH", "PHL", "608"),
    ("Poland", "PL", "POL", "616"),
    ("Portugal", "PT", "PRT", "620"),
    ("Puerto Rico", "PR", "PRI", "630"),
    ("Qatar", "QA", "QAT", "634"),
    ("Romania", "RO", "ROU", "642"),
    ("Russia", "RU", "RUS", "643"),
    ("Rwanda", "RW", "RWA", "646"),
    ("Saint Kitts and Nevis", "KN", "KNA", "659"),
    ("Saint Lucia", "LC", "LCA", "662"),
    ("Saint Vincent and the Grenadines", "VC", "VCT", "670"),
    ("Samoa", "WS", "WSM", "882"),
    ("San Marino", "SM", "SMR", "674"),
    ("Sao Tome and Principe", "ST", "STP", "678"),
    ("Saudi Arabia", "SA", "SAU", "682"),
    ("Senegal", "SN", "SEN", "686"),
    ("Serbia", "RS", "SRB", "688"),
    ("Seychelles", "SC", "SYC", "690"),
    ("Sierra Leone", "SL", "SLE", "694"),
    ("Singapore", "SG", "SGP", "702"),
    ("Slovakia", "SK", "SVK", "703"),
    ("Slovenia", "SI", "SVN", "705"),
    ("Solomon Islands", "SB", "SLB", "090"),
    ("Somalia", "SO", "SOM", "706"),
    ("South Africa", "ZA", "ZAF", "710"),
    ("South Korea", "KR", "KOR", "410"),
    ("South Sudan", "SS", "SSD", "728"),
    ("Spain", "ES", "ESP", "724"),
    ("Sri Lanka", "LK", "LKA", "144"),
    ("Sudan", "SD", "SDN", "729"),
    ("Suriname", "SR", "SUR", "740"),
    ("Sweden", "SE", "SWE", "752"),
    ("Switzerland", "CH", "CHE", "756"),
    ("Syria", "SY", "SYR", "760"),
    ("Taiwan", "TW", "TWN", "158"),
    ("Tajikistan", "TJ", "TJK", "762"),
    ("Tanzania", "TZ", "TZA", "834"),
    ("Thailand", "TH", "THA", "764"),
    ("Timor-Leste", "TL", "TLS", "626"),
    ("Togo", "TG", "TGO", "768"),
    ("Tonga", "TO", "TON", "776"),
    ("Trinidad and Tobago", "TT", "TTO", "780"),
    ("Tunisia", "TN", "TUN", "788"),
    ("Turkey", "TR", "TUR", "792"),
    ("Turkmenistan", "TM", "TKM", "795"),
    ("Tuvalu", "TV", "TUV", "798"),
    ("Uganda", "UG", "UGA", "800"),
    ("Ukraine", "UA", "UKR", "804"),
    ("United Arab Emirates", "AE", "ARE", "784"),
    ("United Kingdom", "GB", "GBR", "826"),
    ("United States", "US", "USA", "840"),
    ("Uruguay", "UY", "URY", "858"),
    ("US Virgin Islands", "VI", "VIR", "850"),
    ("Uzbekistan", "UZ", "UZB", "860"),
    ("Vanuatu", "VU", "VUT", "548"),
    ("Vatican City", "VA", "VAT", "336"),
    ("Venezuela", "VE", "VEN", "862"),
    ("Vietnam", "VN", "VNM", "704"),
    ("Yemen", "YE", "YEM", "887"),
    ("Zambia", "ZM", "ZMB", "894"),
    ("Zimbabwe", "ZW", "ZWE", "716"),
];

/// First-level administrative areas: `(name, iso_code, fips_alpha, fips_code)`.
/// FIPS codes exist only for the United States.
pub const REGIONS: &[(&str, &str, &str, &str)] = &[
    ("Alabama", "US-AL", "AL", "01"),
    ("Alaska", "US-AK", "AK", "02"),
    ("Arizona", "US-AZ", "AZ", "04"),
    ("Arkansas", "US-AR", "AR", "05"),
    ("California", "US-CA", "CA", "06"),
    ("Colorado", "US-CO", "CO", "08"),
    ("Connecticut", "US-CT", "CT", "09"),
    ("Delaware", "US-DE", "DE", "10"),
    ("District of Columbia", "US-DC", "DC", "11"),
    ("Florida", "US-FL", "FL", "12"),
    ("Georgia", "US-GA", "GA", "13"),
    ("Hawaii", "US-HI", "HI", "15"),
    ("Idaho", "US-ID", "ID", "16"),
    ("Illinois", "US-IL", "IL", "17"),
    ("Indiana", "US-IN", "IN", "18"),
    ("Iowa", "US-IA", "IA", "19"),
    ("Kansas", "US-KS", "KS", "20"),
    ("Kentucky", "US-KY", "KY", "21"),
    ("Louisiana", "US-LA", "LA", "22"),
    ("Maine", "US-ME", "ME", "23"),
    ("Maryland", "US-MD", "MD", "24"),
    ("Massachusetts", "US-MA", "MA", "25"),
    ("Michigan", "US-MI", "MI", "26"),
    ("Minnesota", "US-MN", "MN", "27"),
    ("Mississippi", "US-MS", "MS", "28"),
    ("Missouri", "US-MO", "MO", "29"),
    ("Montana", "US-MT", "MT", "30"),
    ("Nebraska", "US-NE", "NE", "31"),
    ("Nevada", "US-NV", "NV", "32"),
    ("New Hampshire", "US-NH", "NH", "33"),
    ("New Jersey", "US-NJ", "NJ", "34"),
    ("New Mexico", "US-NM", "NM", "35"),
    ("New York", "US-NY", "NY", "36"),
    ("North Carolina", "US-NC", "NC", "37"),
    ("North Dakota", "US-ND", "ND", "38"),
    ("Ohio", "US-OH", "OH", "39"),
    ("Oklahoma", "US-OK", "OK", "40"),
    ("Oregon", "US-OR", "OR", "41"),
    ("Pennsylvania", "US-PA", "PA", "42"),
    ("Rhode Island", "US-RI", "RI", "44"),
    ("South Carolina", "US-SC", "SC", "45"),
    ("South Dakota", "US-SD", "SD", "46"),
    ("Tennessee", "US-TN", "TN", "47"),
    ("Texas", "US-TX", "TX", "48"),
    ("Utah", "US-UT", "UT", "49"),
    ("Vermont", "US-VT", "VT", "50"),
    ("Virginia", "US-VA", "VA", "51"),
    ("Washington", "US-WA", "WA", "53"),
    ("West Virginia", "US-WV", "WV", "54"),
    ("Wisconsin", "US-WI", "WI", "55"),
    ("Wyoming", "US-WY", "WY", "56"),
    ("American Samoa", "US-AS", "AS", "60"),
    ("Guam", "US-GU", "GU", "66"),
    ("Northern Mariana Islands", "US-MP", "MP", "69"),
    ("Puerto Rico", "US-PR", "PR", "72"),
    ("United States Virgin Islands", "US-VI", "VI", "78"),
    ("Andhra Pradesh", "IN-AP", "", ""),
    ("Arunachal Pradesh", "IN-AR", "", ""),
    ("Assam", "IN-AS", "", ""),
    ("Bihar", "IN-BR", "", ""),
    ("Chhattisgarh", "IN-CT", "", ""),
    ("Goa", "IN-GA", "", ""),
    ("Gujarat", "IN-GJ", "", ""),
    ("Haryana", "IN-HR", "", ""),
    ("Himachal Pradesh", "IN-HP", "", ""),
    ("Jharkhand", "IN-JH", "", ""),
    ("Karnataka", "IN-KA", "", ""),
    ("Kerala", "IN-KL", "", ""),
    ("Madhya Pradesh", "IN-MP", "", ""),
    ("Maharashtra", "IN-MH", "", ""),
    ("Manipur", "IN-MN", "", ""),
    ("Meghalaya", "IN-ML", "", ""),
    ("Mizoram", "IN-MZ", "", ""),
    ("Nagaland", "IN-NL", "", ""),
    ("Odisha", "IN-OR", "", ""),
    ("Punjab", "IN-PB", "", ""),
    ("Rajasthan", "IN-RJ", "", ""),
    ("Sikkim", "IN-SK", "", ""),
    ("Tamil Nadu", "IN-TN", "", ""),
    ("Telangana", "IN-TG", "", ""),
    ("Tripura", "IN-TR", "", ""),
    ("Uttar Pradesh", "IN-UP", "", ""),
    ("Uttarakhand", "IN-UT", "", ""),
    ("West Bengal", "IN-WB", "", ""),
    ("Andaman and Nicobar Islands", "IN-AN", "", ""),
    ("Chandigarh", "IN-CH", "", ""),
    ("Delhi", "IN-DL", "", ""),
    ("Jammu and Kashmir", "IN-JK", "", ""),
    ("Ladakh", "IN-LA", "", ""),
    ("Lakshadweep", "IN-LD", "", ""),
    ("Puducherry", "IN-PY", "", ""),
];
