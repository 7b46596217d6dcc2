//! Region metadata strings keyed by two-letter region code.
//!
//! `ZZ` is the default entry used when a region has no data of its own.

/// Region code and JSON metadata pairs, sorted by region code.
pub const REGION_DATA: &[(&str, &str)] = &[
    ("AC", r#"{"name":"ASCENSION ISLAND","fmt":"%N%n%O%n%A%n%C%n%Z"}"#),
    ("AD", r#"{"name":"ANDORRA","lang":"ca","languages":"ca","fmt":"%N%n%O%n%A%n%Z %C"}"#),
    (
        "AE",
        r#"{"name":"UNITED ARAB EMIRATES","lang":"ar","languages":"ar","lfmt":"%N%n%O%n%A%n%S","fmt":"%N%n%O%n%A%n%S","require":"AS","state_name_type":"emirate"}"#,
    ),
    ("AF", r#"{"name":"AFGHANISTAN","fmt":"%N%n%O%n%A%n%C%n%Z"}"#),
    ("AG", r#"{"name":"ANTIGUA AND BARBUDA","require":"A"}"#),
    ("AI", r#"{"name":"ANGUILLA","fmt":"%N%n%O%n%A%n%C%n%Z"}"#),
    ("AL", r#"{"name":"ALBANIA","fmt":"%N%n%O%n%A%n%Z%n%C"}"#),
    (
        "AM",
        r#"{"name":"ARMENIA","lang":"hy","languages":"hy","lfmt":"%N%n%O%n%A%n%Z%n%C%n%S","fmt":"%N%n%O%n%A%n%Z%n%C%n%S"}"#,
    ),
    ("AO", r#"{"name":"ANGOLA"}"#),
    ("AQ", r#"{"name":"ANTARCTICA"}"#),
    (
        "AR",
        r#"{"name":"ARGENTINA","lang":"es","languages":"es","fmt":"%N%n%O%n%A%n%Z %C%n%S","upper":"ACZ"}"#,
    ),
    (
        "AS",
        r#"{"name":"AMERICAN SAMOA","fmt":"%N%n%O%n%A%n%C %S %Z","require":"ACSZ","upper":"ACNOS","state_name_type":"state","zip_name_type":"zip"}"#,
    ),
    ("AT", r#"{"name":"AUSTRIA","fmt":"%O%n%N%n%A%n%Z %C","require":"ACZ"}"#),
    (
        "AU",
        r#"{"name":"AUSTRALIA","lang":"en","languages":"en","fmt":"%O%n%N%n%A%n%C %S %Z","require":"ACSZ","upper":"CS","locality_name_type":"suburb","state_name_type":"state"}"#,
    ),
    ("AW", r#"{"name":"ARUBA"}"#),
    (
        "AX",
        r#"{"name":"FINLAND","fmt":"%O%n%N%n%A%nAX-%Z %C%nÅLAND","require":"ACZ","postprefix":"AX-"}"#,
    ),
    ("AZ", r#"{"name":"AZERBAIJAN","fmt":"%N%n%O%n%A%nAZ %Z %C","postprefix":"AZ "}"#),
    ("BA", r#"{"name":"BOSNIA AND HERZEGOVINA","fmt":"%N%n%O%n%A%n%Z %C"}"#),
    (
        "BB",
        r#"{"name":"BARBADOS","lang":"en","languages":"en","fmt":"%N%n%O%n%A%n%C, %S %Z","state_name_type":"parish"}"#,
    ),
    ("BD", r#"{"name":"BANGLADESH","fmt":"%N%n%O%n%A%n%C - %Z"}"#),
    ("BE", r#"{"name":"BELGIUM","fmt":"%O%n%N%n%A%n%Z %C","require":"ACZ"}"#),
    ("BF", r#"{"name":"BURKINA FASO","fmt":"%N%n%O%n%A%n%C %X"}"#),
    ("BG", r#"{"name":"BULGARIA (REP.)","fmt":"%N%n%O%n%A%n%Z %C"}"#),
    ("BH", r#"{"name":"BAHRAIN","fmt":"%N%n%O%n%A%n%C %Z"}"#),
    ("BI", r#"{"name":"BURUNDI"}"#),
    ("BJ", r#"{"name":"BENIN","upper":"AC"}"#),
    (
        "BL",
        r#"{"name":"SAINT BARTHELEMY","fmt":"%O%n%N%n%A%n%Z %C %X","require":"ACZ","upper":"ACX"}"#,
    ),
    ("BM", r#"{"name":"BERMUDA","fmt":"%N%n%O%n%A%n%C %Z"}"#),
    ("BN", r#"{"name":"BRUNEI DARUSSALAM","fmt":"%N%n%O%n%A%n%C %Z"}"#),
    ("BO", r#"{"name":"BOLIVIA","upper":"AC"}"#),
    ("BQ", r#"{"name":"BONAIRE, SINT EUSTATIUS, AND SABA"}"#),
    (
        "BR",
        r#"{"name":"BRAZIL","lang":"pt","languages":"pt","fmt":"%O%n%N%n%A%n%D%n%C-%S%n%Z","require":"ASCZ","upper":"CS","sublocality_name_type":"neighborhood","state_name_type":"state","width_overrides":"%C:L%S:S","label_overrides":[{"field":"S2","label":"Setor/ADE/Folha"},{"field":"S3","label":"Quadra"},{"field":"S4","label":"Trecho/AE/Modulo"},{"field":"S5","label":"Cj/Bl/MI/Projeção/Etapa"},{"field":"LP","label":"Lote"},{"field":"BI","label":"Casa/Comercio"},{"field":"CG","label":"Complexo/Chácara"}]}"#,
    ),
    (
        "BS",
        r#"{"name":"BAHAMAS","lang":"en","languages":"en","fmt":"%N%n%O%n%A%n%C, %S","state_name_type":"island"}"#,
    ),
    ("BT", r#"{"name":"BHUTAN","fmt":"%N%n%O%n%A%n%C %Z"}"#),
    ("BV", r#"{"name":"BOUVET ISLAND"}"#),
    ("BW", r#"{"name":"BOTSWANA"}"#),
    (
        "BY",
        r#"{"name":"BELARUS","lang":"be","languages":"be~ru","fmt":"%O%n%N%n%A%n%Z, %C%n%S"}"#,
    ),
    ("BZ", r#"{"name":"BELIZE"}"#),
    (
        "CA",
        r#"{"name":"CANADA","lang":"en","languages":"en~fr","fmt":"%N%n%O%n%A%n%C %S %Z","require":"ACSZ","upper":"ACNOSZ"}"#,
    ),
    ("CC", r#"{"name":"COCOS (KEELING) ISLANDS","fmt":"%O%n%N%n%A%n%C %S %Z","upper":"CS"}"#),
    ("CD", r#"{"name":"CONGO (DEM. REP.)"}"#),
    ("CF", r#"{"name":"CENTRAL AFRICAN REPUBLIC"}"#),
    ("CG", r#"{"name":"CONGO (REP.)"}"#),
    (
        "CH",
        r#"{"name":"SWITZERLAND","fmt":"%O%n%N%n%A%nCH-%Z %C","require":"ACZ","upper":"","postprefix":"CH-"}"#,
    ),
    ("CI", r#"{"name":"COTE D'IVOIRE","fmt":"%N%n%O%n%X %A %C %X"}"#),
    ("CK", r#"{"name":"COOK ISLANDS"}"#),
    ("CL", r#"{"name":"CHILE","lang":"es","languages":"es","fmt":"%N%n%O%n%A%n%Z %C%n%S"}"#),
    ("CM", r#"{"name":"CAMEROON"}"#),
    (
        "CN",
        r#"{"name":"CHINA","lang":"zh","languages":"zh","lfmt":"%N%n%O%n%A%n%D%n%C%n%S, %Z","fmt":"%Z%n%S%C%D%n%A%n%O%n%N","require":"ACSZ","upper":"S","sublocality_name_type":"district","width_overrides":"%S:S%C:S%D:S","label_overrides":[{"field":"C","label":"市/自治州/地区/盟","lang":"zh"},{"field":"S","label":"省/自治区/直辖市","lang":"zh"},{"field":"D","label":"区/县/旗","lang":"zh"}]}"#,
    ),
    (
        "CO",
        r#"{"name":"COLOMBIA","lang":"es","languages":"es","fmt":"%N%n%O%n%A%n%D%n%C, %S, %Z","require":"AS","state_name_type":"department","label_overrides":[{"field":"LL","label":"Vereda"},{"field":"A3","label":"Corregimiento"},{"field":"A2","label":"Municipio"}]}"#,
    ),
    (
        "CR",
        r#"{"name":"COSTA RICA","lang":"es","languages":"es","fmt":"%N%n%O%n%A%n%S, %C%n%Z","require":"ACS"}"#,
    ),
    ("CU", r#"{"name":"CUBA","lang":"es","languages":"es","fmt":"%N%n%O%n%A%n%C %S%n%Z"}"#),
    (
        "CV",
        r#"{"name":"CAPE VERDE","lang":"pt","languages":"pt","fmt":"%N%n%O%n%A%n%Z %C%n%S","state_name_type":"island"}"#,
    ),
    ("CW", r#"{"name":"CURACAO"}"#),
    ("CX", r#"{"name":"CHRISTMAS ISLAND","fmt":"%O%n%N%n%A%n%C %S %Z","upper":"CS"}"#),
    ("CY", r#"{"name":"CYPRUS","fmt":"%N%n%O%n%A%n%Z %C"}"#),
    (
        "CZ",
        r#"{"name":"CZECH REP.","fmt":"%N%n%O%n%A%n%Z %C","require":"ACZ","label_overrides":[{"field":"NH","label":"Obecní část","lang":"cs"},{"field":"NH","label":"Obecný časť","lang":"sk"},{"field":"BI","label":"Descriptive No."},{"field":"BI","label":"Popisné číslo","lang":"cs"},{"field":"BI","label":"Súpisné číslo","lang":"sk"},{"field":"SN","label":"Orientation No."},{"field":"SN","label":"Orientační číslo","lang":"cs"},{"field":"SN","label":"Orientačné číslo","lang":"sk"},{"field":"S1","label":"City District"},{"field":"S1","label":"Městská část","lang":"cs"},{"field":"S1","label":"Mestská časť","lang":"sk"}]}"#,
    ),
    ("DE", r#"{"name":"GERMANY","fmt":"%N%n%O%n%A%n%Z %C","require":"ACZ"}"#),
    ("DJ", r#"{"name":"DJIBOUTI"}"#),
    ("DK", r#"{"name":"DENMARK","fmt":"%N%n%O%n%A%n%Z %C","require":"ACZ"}"#),
    ("DM", r#"{"name":"DOMINICA"}"#),
    ("DO", r#"{"name":"DOMINICAN REP.","fmt":"%N%n%O%n%A%n%Z %C"}"#),
    ("DZ", r#"{"name":"ALGERIA","fmt":"%N%n%O%n%A%n%Z %C"}"#),
    ("EC", r#"{"name":"ECUADOR","fmt":"%N%n%O%n%A%n%Z%n%C","upper":"CZ"}"#),
    (
        "EE",
        r#"{"name":"ESTONIA","lang":"et","languages":"et","fmt":"%N%n%O%n%A%n%Z %C %S","require":"ACZ","label_overrides":[{"field":"C","label":"Linn/vald","lang":"et"},{"field":"C","label":"City/Parish","lang":"en"},{"field":"S","label":"Maakond","lang":"et"},{"field":"S","label":"Region","lang":"en"}]}"#,
    ),
    (
        "EG",
        r#"{"name":"EGYPT","lang":"ar","languages":"ar","lfmt":"%N%n%O%n%A%n%C%n%S%n%Z","fmt":"%N%n%O%n%A%n%C%n%S%n%Z"}"#,
    ),
    ("EH", r#"{"name":"WESTERN SAHARA","fmt":"%N%n%O%n%A%n%Z %C"}"#),
    ("ER", r#"{"name":"ERITREA"}"#),
    (
        "ES",
        r#"{"name":"SPAIN","lang":"es","languages":"es~ca~gl~eu","fmt":"%N%n%O%n%A%n%Z %C %S","require":"ACSZ","upper":"CS","width_overrides":"%S:S"}"#,
    ),
    ("ET", r#"{"name":"ETHIOPIA","fmt":"%N%n%O%n%A%n%Z %C"}"#),
    (
        "FI",
        r#"{"name":"FINLAND","fmt":"%O%n%N%n%A%nFI-%Z %C","require":"ACZ","postprefix":"FI-"}"#,
    ),
    ("FJ", r#"{"name":"FIJI"}"#),
    (
        "FK",
        r#"{"name":"FALKLAND ISLANDS (MALVINAS)","fmt":"%N%n%O%n%A%n%C%n%Z","require":"ACZ","upper":"CZ"}"#,
    ),
    (
        "FM",
        r#"{"name":"MICRONESIA (Federated State of)","lang":"en","languages":"en","fmt":"%N%n%O%n%A%n%C %S %Z","require":"ACSZ","upper":"ACNOS","state_name_type":"state","zip_name_type":"zip"}"#,
    ),
    ("FO", r#"{"name":"FAROE ISLANDS","fmt":"%N%n%O%n%A%nFO%Z %C","postprefix":"FO"}"#),
    ("FR", r#"{"name":"FRANCE","fmt":"%O%n%N%n%A%n%Z %C","require":"ACZ","upper":"CX"}"#),
    ("GA", r#"{"name":"GABON"}"#),
    (
        "GB",
        r#"{"name":"UNITED KINGDOM","fmt":"%N%n%O%n%A%n%C%n%Z","require":"ACZ","upper":"CZ","locality_name_type":"post_town","label_overrides":[{"field":"LL","message":"MSG_DEPENDENT_LOCALITY_LABEL"},{"field":"Z","label":"Postcode","lang":"en"}]}"#,
    ),
    ("GD", r#"{"name":"GRENADA (WEST INDIES)"}"#),
    ("GE", r#"{"name":"GEORGIA","fmt":"%N%n%O%n%A%n%Z %C"}"#),
    (
        "GF",
        r#"{"name":"FRENCH GUIANA","fmt":"%O%n%N%n%A%n%Z %C %X","require":"ACZ","upper":"ACX"}"#,
    ),
    (
        "GG",
        r#"{"name":"CHANNEL ISLANDS","fmt":"%N%n%O%n%A%n%C%nGUERNSEY%n%Z","require":"ACZ","upper":"CZ"}"#,
    ),
    ("GH", r#"{"name":"GHANA"}"#),
    ("GI", r#"{"name":"GIBRALTAR","fmt":"%N%n%O%n%A%nGIBRALTAR%n%Z","require":"A"}"#),
    ("GL", r#"{"name":"GREENLAND","fmt":"%N%n%O%n%A%n%Z %C","require":"ACZ"}"#),
    ("GM", r#"{"name":"GAMBIA"}"#),
    ("GN", r#"{"name":"GUINEA","fmt":"%N%n%O%n%Z %A %C"}"#),
    ("GP", r#"{"name":"GUADELOUPE","fmt":"%O%n%N%n%A%n%Z %C %X","require":"ACZ","upper":"ACX"}"#),
    ("GQ", r#"{"name":"EQUATORIAL GUINEA"}"#),
    ("GR", r#"{"name":"GREECE","fmt":"%N%n%O%n%A%n%Z %C","require":"ACZ"}"#),
    (
        "GS",
        r#"{"name":"SOUTH GEORGIA","fmt":"%N%n%O%n%A%n%n%C%n%Z","require":"ACZ","upper":"CZ"}"#,
    ),
    ("GT", r#"{"name":"GUATEMALA","fmt":"%N%n%O%n%A%n%Z- %C"}"#),
    (
        "GU",
        r#"{"name":"GUAM","fmt":"%N%n%O%n%A%n%C %Z","require":"ACZ","upper":"ACNO","zip_name_type":"zip"}"#,
    ),
    ("GW", r#"{"name":"GUINEA-BISSAU","fmt":"%N%n%O%n%A%n%Z %C"}"#),
    ("GY", r#"{"name":"GUYANA"}"#),
    (
        "HK",
        r#"{"name":"HONG KONG","lang":"zh-Hant","languages":"zh-Hant~en","lfmt":"%N%n%O%n%A%n%C%n%S","fmt":"%S%n%C%n%A%n%O%n%N","require":"AS","upper":"S","locality_name_type":"district","state_name_type":"area","width_overrides":"%S:S%C:L","label_overrides":[{"field":"C","label":"地区","lang":"zh"},{"field":"C","label":"地區","lang":"zh-HK"},{"field":"C","label":"地區","lang":"zh-TW"},{"field":"CS","label":"Flat / Room","lang":"en"},{"field":"CS","label":"單位編號","lang":"zh-HK"},{"field":"BG","label":"大廈名稱","lang":"zh-HK"}]}"#,
    ),
    ("HM", r#"{"name":"HEARD AND MCDONALD ISLANDS","fmt":"%O%n%N%n%A%n%C %S %Z","upper":"CS"}"#),
    (
        "HN",
        r#"{"name":"HONDURAS","lang":"es","languages":"es","fmt":"%N%n%O%n%A%n%C, %S%n%Z","require":"ACS","state_name_type":"department"}"#,
    ),
    ("HR", r#"{"name":"CROATIA","fmt":"%N%n%O%n%A%nHR-%Z %C","postprefix":"HR-"}"#),
    ("HT", r#"{"name":"HAITI","fmt":"%N%n%O%n%A%nHT%Z %C","postprefix":"HT"}"#),
    (
        "HU",
        r#"{"name":"HUNGARY (Rep.)","fmt":"%N%n%O%n%C%n%A%n%Z","require":"ACZ","upper":"ACNO"}"#,
    ),
    (
        "ID",
        r#"{"name":"INDONESIA","lang":"id","languages":"id","fmt":"%N%n%O%n%A%n%C%n%S %Z","require":"AS","label_overrides":[{"field":"A7","label":"RT"},{"field":"A6","label":"RW"},{"field":"A5","label":"Dusun/Banjar"},{"field":"BI","label":"Blok"},{"field":"A4","message":"MSG_VILLAGE"},{"field":"A3","label":"Kecamatan"},{"field":"S1","label":"Pasar"}]}"#,
    ),
    (
        "IE",
        r#"{"name":"IRELAND","lang":"en","languages":"en","fmt":"%N%n%O%n%A%n%D%n%C%n%S%n%Z","sublocality_name_type":"townland","state_name_type":"county","zip_name_type":"eircode","label_overrides":[{"field":"S","label":"郡","lang":"zh"}]}"#,
    ),
    ("IL", r#"{"name":"ISRAEL","fmt":"%N%n%O%n%A%n%C %Z"}"#),
    ("IM", r#"{"name":"ISLE OF MAN","fmt":"%N%n%O%n%A%n%C%n%Z","require":"ACZ","upper":"CZ"}"#),
    (
        "IN",
        r#"{"name":"INDIA","lang":"en","languages":"en~hi","fmt":"%N%n%O%n%A%n%T%n%F%n%L%n%C %Z%n%S","require":"ACSZ","state_name_type":"state","zip_name_type":"pin","label_overrides":[{"field":"S1","label":"Sublocality 1"},{"field":"S2","label":"Sublocality 2"},{"field":"S3","label":"Sublocality 3"},{"field":"S4","label":"Sublocality 4"}]}"#,
    ),
    (
        "IO",
        r#"{"name":"BRITISH INDIAN OCEAN TERRITORY","fmt":"%N%n%O%n%A%n%C%n%Z","require":"ACZ","upper":"CZ"}"#,
    ),
    (
        "IQ",
        r#"{"name":"IRAQ","lang":"ar","languages":"ar","fmt":"%O%n%N%n%A%n%C, %S%n%Z","require":"ACS","upper":"CS"}"#,
    ),
    (
        "IR",
        r#"{"name":"IRAN","lang":"fa","languages":"fa","fmt":"%O%n%N%n%S%n%C, %D%n%A%n%Z","sublocality_name_type":"neighborhood"}"#,
    ),
    ("IS", r#"{"name":"ICELAND","fmt":"%N%n%O%n%A%n%Z %C"}"#),
    (
        "IT",
        r#"{"name":"ITALY","lang":"it","languages":"it","fmt":"%N%n%O%n%A%n%Z %C %S","require":"ACSZ","upper":"CS","width_overrides":"%S:S"}"#,
    ),
    (
        "JE",
        r#"{"name":"CHANNEL ISLANDS","fmt":"%N%n%O%n%A%n%C%nJERSEY%n%Z","require":"ACZ","upper":"CZ"}"#,
    ),
    (
        "JM",
        r#"{"name":"JAMAICA","lang":"en","languages":"en","fmt":"%N%n%O%n%A%n%C%n%S %X","require":"ACS","state_name_type":"parish"}"#,
    ),
    ("JO", r#"{"name":"JORDAN","fmt":"%N%n%O%n%A%n%C %Z"}"#),
    (
        "JP",
        r#"{"name":"JAPAN","lang":"ja","languages":"ja","lfmt":"%N%n%O%n%A, %S%n%Z","fmt":"〒%Z%n%S%n%A%n%O%n%N","require":"ASZ","upper":"S","state_name_type":"prefecture","width_overrides":"%S:S"}"#,
    ),
    ("KE", r#"{"name":"KENYA","fmt":"%N%n%O%n%A%n%C%n%Z"}"#),
    ("KG", r#"{"name":"KYRGYZSTAN","fmt":"%N%n%O%n%A%n%Z %C"}"#),
    ("KH", r#"{"name":"CAMBODIA","fmt":"%N%n%O%n%A%n%C %Z"}"#),
    (
        "KI",
        r#"{"name":"KIRIBATI","fmt":"%N%n%O%n%A%n%S%n%C","upper":"ACNOS","state_name_type":"island"}"#,
    ),
    ("KM", r#"{"name":"COMOROS","upper":"AC"}"#),
    (
        "KN",
        r#"{"name":"SAINT KITTS AND NEVIS","lang":"en","languages":"en","fmt":"%N%n%O%n%A%n%C, %S","require":"ACS","state_name_type":"island"}"#,
    ),
    (
        "KP",
        r#"{"name":"NORTH KOREA","lang":"ko","languages":"ko","lfmt":"%N%n%O%n%A%n%C%n%S, %Z","fmt":"%Z%n%S%n%C%n%A%n%O%n%N"}"#,
    ),
    (
        "KR",
        r#"{"name":"SOUTH KOREA","lang":"ko","languages":"ko","lfmt":"%N%n%O%n%A%n%D%n%C%n%S%n%Z","fmt":"%S %C%D%n%A%n%O%n%N%n%Z","require":"ACSZ","upper":"Z","sublocality_name_type":"district","state_name_type":"do_si","label_overrides":[{"field":"BI","message":"MSG_STREET_NUMBER"},{"field":"S2","message":"MSG_NEIGHBORHOOD"},{"field":"S4","message":"MSG_STREET_NAME"}]}"#,
    ),
    ("KW", r#"{"name":"KUWAIT","fmt":"%N%n%O%n%A%n%Z %C"}"#),
    (
        "KY",
        r#"{"name":"CAYMAN ISLANDS","lang":"en","languages":"en","fmt":"%N%n%O%n%A%n%S %Z","require":"AS","state_name_type":"island"}"#,
    ),
    (
        "KZ",
        r#"{"name":"KAZAKHSTAN","lang":"kk","languages":"kk~ru","fmt":"%Z%n%S%n%C%n%A%n%O%n%N"}"#,
    ),
    ("LA", r#"{"name":"LAO (PEOPLE'S DEM. REP.)","fmt":"%N%n%O%n%A%n%Z %C"}"#),
    ("LB", r#"{"name":"LEBANON","fmt":"%N%n%O%n%A%n%C %Z"}"#),
    ("LC", r#"{"name":"SAINT LUCIA"}"#),
    (
        "LI",
        r#"{"name":"LIECHTENSTEIN","fmt":"%O%n%N%n%A%nFL-%Z %C","require":"ACZ","postprefix":"FL-"}"#,
    ),
    ("LK", r#"{"name":"SRI LANKA","fmt":"%N%n%O%n%A%n%C%n%Z"}"#),
    ("LR", r#"{"name":"LIBERIA","fmt":"%N%n%O%n%A%n%Z %C"}"#),
    ("LS", r#"{"name":"LESOTHO","fmt":"%N%n%O%n%A%n%C %Z"}"#),
    (
        "LT",
        r#"{"name":"LITHUANIA","fmt":"%O%n%N%n%A%nLT-%Z %C %S","require":"ACZ","postprefix":"LT-"}"#,
    ),
    (
        "LU",
        r#"{"name":"LUXEMBOURG","fmt":"%O%n%N%n%A%nL-%Z %C","require":"ACZ","postprefix":"L-"}"#,
    ),
    (
        "LV",
        r#"{"name":"LATVIA","fmt":"%N%n%O%n%A%n%S%n%C, %Z","require":"ACZ","label_overrides":[{"field":"C","label":"Novads","lang":"lv"},{"field":"C","label":"Municipality","lang":"en"},{"field":"S","label":"Pagasts/pilsēta","lang":"lv"},{"field":"S","label":"Parish/town","lang":"en"}]}"#,
    ),
    ("LY", r#"{"name":"LIBYA"}"#),
    ("MA", r#"{"name":"MOROCCO","fmt":"%N%n%O%n%A%n%Z %C"}"#),
    ("MC", r#"{"name":"MONACO","fmt":"%N%n%O%n%A%nMC-%Z %C %X","postprefix":"MC-"}"#),
    ("MD", r#"{"name":"Rep. MOLDOVA","fmt":"%N%n%O%n%A%nMD-%Z %C","postprefix":"MD-"}"#),
    ("ME", r#"{"name":"MONTENEGRO","fmt":"%N%n%O%n%A%n%Z %C"}"#),
    (
        "MF",
        r#"{"name":"SAINT MARTIN","fmt":"%O%n%N%n%A%n%Z %C %X","require":"ACZ","upper":"ACX"}"#,
    ),
    ("MG", r#"{"name":"MADAGASCAR","fmt":"%N%n%O%n%A%n%Z %C"}"#),
    (
        "MH",
        r#"{"name":"MARSHALL ISLANDS","fmt":"%N%n%O%n%A%n%C %S %Z","require":"ACSZ","upper":"ACNOS","state_name_type":"state","zip_name_type":"zip"}"#,
    ),
    ("MK", r#"{"name":"MACEDONIA","fmt":"%N%n%O%n%A%n%Z %C"}"#),
    ("ML", r#"{"name":"MALI"}"#),
    ("MM", r#"{"name":"MYANMAR","fmt":"%N%n%O%n%A%n%C, %Z"}"#),
    ("MN", r#"{"name":"MONGOLIA","lang":"mn","languages":"mn","fmt":"%N%n%O%n%A%n%C%n%S %Z"}"#),
    (
        "MO",
        r#"{"name":"MACAO","lang":"zh-Hant","languages":"zh-Hant","lfmt":"%N%n%O%n%A","fmt":"%A%n%O%n%N","require":"A"}"#,
    ),
    (
        "MP",
        r#"{"name":"NORTHERN MARIANA ISLANDS","fmt":"%N%n%O%n%A%n%C %S %Z","require":"ACSZ","upper":"ACNOS","state_name_type":"state","zip_name_type":"zip"}"#,
    ),
    ("MQ", r#"{"name":"MARTINIQUE","fmt":"%O%n%N%n%A%n%Z %C %X","require":"ACZ","upper":"ACX"}"#),
    ("MR", r#"{"name":"MAURITANIA","upper":"AC"}"#),
    ("MS", r#"{"name":"MONTSERRAT"}"#),
    ("MT", r#"{"name":"MALTA","fmt":"%N%n%O%n%A%n%C %Z","upper":"CZ"}"#),
    ("MU", r#"{"name":"MAURITIUS","fmt":"%N%n%O%n%A%n%Z%n%C","upper":"CZ"}"#),
    ("MV", r#"{"name":"MALDIVES","fmt":"%N%n%O%n%A%n%C %Z"}"#),
    ("MW", r#"{"name":"MALAWI","fmt":"%N%n%O%n%A%n%C %X"}"#),
    (
        "MX",
        r#"{"name":"MEXICO","lang":"es","languages":"es","fmt":"%N%n%O%n%A%n%D%n%Z %C, %S","require":"ACSZ","upper":"CSZ","sublocality_name_type":"neighborhood","state_name_type":"state","width_overrides":"%S:S","label_overrides":[{"field":"S1","label":"Delegación"},{"field":"S2","label":"Supermanzana"},{"field":"S3","label":"Manzana"},{"field":"LP","label":"Lote"}]}"#,
    ),
    (
        "MY",
        r#"{"name":"MALAYSIA","lang":"ms","languages":"ms","fmt":"%N%n%O%n%A%n%D%n%Z %C%n%S","require":"ACZ","upper":"CS","sublocality_name_type":"village_township","state_name_type":"state"}"#,
    ),
    ("MZ", r#"{"name":"MOZAMBIQUE","lang":"pt","languages":"pt","fmt":"%N%n%O%n%A%n%Z %C%S"}"#),
    ("NA", r#"{"name":"NAMIBIA","fmt":"%N%n%O%n%A%n%C%n%Z"}"#),
    (
        "NC",
        r#"{"name":"NEW CALEDONIA","fmt":"%O%n%N%n%A%n%Z %C %X","require":"ACZ","upper":"ACX"}"#,
    ),
    ("NE", r#"{"name":"NIGER","fmt":"%N%n%O%n%A%n%Z %C"}"#),
    ("NF", r#"{"name":"NORFOLK ISLAND","fmt":"%O%n%N%n%A%n%C %S %Z","upper":"CS"}"#),
    (
        "NG",
        r#"{"name":"NIGERIA","lang":"en","languages":"en","fmt":"%N%n%O%n%A%n%D%n%C %Z%n%S","upper":"CS","state_name_type":"state","label_overrides":[{"field":"D","label":"Local government area","lang":"en"}]}"#,
    ),
    (
        "NI",
        r#"{"name":"NICARAGUA","lang":"es","languages":"es","fmt":"%N%n%O%n%A%n%Z%n%C, %S","upper":"CS","state_name_type":"department"}"#,
    ),
    ("NL", r#"{"name":"NETHERLANDS","fmt":"%O%n%N%n%A%n%Z %C","require":"ACZ"}"#),
    (
        "NO",
        r#"{"name":"NORWAY","fmt":"%N%n%O%n%A%n%Z %C","require":"ACZ","locality_name_type":"post_town"}"#,
    ),
    ("NP", r#"{"name":"NEPAL","fmt":"%N%n%O%n%A%n%C %Z"}"#),
    (
        "NR",
        r#"{"name":"NAURU CENTRAL PACIFIC","lang":"en","languages":"en","fmt":"%N%n%O%n%A%n%S","require":"AS","state_name_type":"district"}"#,
    ),
    ("NU", r#"{"name":"NIUE"}"#),
    ("NZ", r#"{"name":"NEW ZEALAND","fmt":"%N%n%O%n%A%n%D%n%C %Z","require":"ACZ"}"#),
    ("OM", r#"{"name":"OMAN","fmt":"%N%n%O%n%A%n%Z%n%C"}"#),
    (
        "PA",
        r#"{"name":"PANAMA (REP.)","lang":"es","languages":"es","fmt":"%N%n%O%n%A%n%C%n%S","upper":"CS"}"#,
    ),
    (
        "PE",
        r#"{"name":"PERU","lang":"es","languages":"es","fmt":"%N%n%O%n%A%n%C %Z%n%S","locality_name_type":"district"}"#,
    ),
    (
        "PF",
        r#"{"name":"FRENCH POLYNESIA","fmt":"%N%n%O%n%A%n%Z %C %S","require":"ACSZ","upper":"CS","state_name_type":"island"}"#,
    ),
    (
        "PG",
        r#"{"name":"PAPUA NEW GUINEA","lang":"tpi","languages":"tpi~en~ho","fmt":"%N%n%O%n%A%n%C %Z %S","require":"ACS"}"#,
    ),
    (
        "PH",
        r#"{"name":"PHILIPPINES","lang":"en","languages":"en","fmt":"%N%n%O%n%A%n%D, %C%n%Z %S"}"#,
    ),
    (
        "PK",
        r#"{"name":"PAKISTAN","fmt":"%N%n%O%n%A%n%D%n%C-%Z","label_overrides":[{"field":"D","label":"Sector","lang":"en"}]}"#,
    ),
    ("PL", r#"{"name":"POLAND","fmt":"%N%n%O%n%A%n%Z %C","require":"ACZ"}"#),
    (
        "PM",
        r#"{"name":"ST. PIERRE AND MIQUELON","fmt":"%O%n%N%n%A%n%Z %C %X","require":"ACZ","upper":"ACX"}"#,
    ),
    ("PN", r#"{"name":"PITCAIRN","fmt":"%N%n%O%n%A%n%C%n%Z","require":"ACZ","upper":"CZ"}"#),
    (
        "PR",
        r#"{"name":"PUERTO RICO","fmt":"%N%n%O%n%A%n%C PR %Z","require":"ACZ","upper":"ACNO","zip_name_type":"zip","postprefix":"PR "}"#,
    ),
    ("PS", r#"{"name":"PALESTINIAN TERRITORY"}"#),
    ("PT", r#"{"name":"PORTUGAL","fmt":"%N%n%O%n%A%n%Z %C","require":"ACZ"}"#),
    (
        "PW",
        r#"{"name":"PALAU","lang":"pau","languages":"pau~en","fmt":"%N%n%O%n%A%n%C %S %Z","require":"ACSZ","upper":"ACNOS","state_name_type":"state","zip_name_type":"zip"}"#,
    ),
    ("PY", r#"{"name":"PARAGUAY","fmt":"%N%n%O%n%A%n%Z %C"}"#),
    ("QA", r#"{"name":"QATAR","upper":"AC"}"#),
    ("RE", r#"{"name":"REUNION","fmt":"%O%n%N%n%A%n%Z %C %X","require":"ACZ","upper":"ACX"}"#),
    (
        "RO",
        r#"{"name":"ROMANIA","lang":"ro","languages":"ro","fmt":"%N%n%O%n%A%n%Z %S %C","require":"ACZ","upper":"AC","label_overrides":[{"field":"C","label":"Județe/sectoare","lang":"ro"},{"field":"C","label":"County/sector","lang":"en"},{"field":"S","label":"Municipiu/oraș/comună","lang":"ro"},{"field":"S","label":"Municipality/city/town/commune","lang":"en"}]}"#,
    ),
    ("RS", r#"{"name":"REPUBLIC OF SERBIA","fmt":"%N%n%O%n%A%n%Z %C"}"#),
    (
        "RU",
        r#"{"name":"RUSSIAN FEDERATION","lang":"ru","languages":"ru","lfmt":"%N%n%O%n%A%n%C%n%S%n%Z","fmt":"%N%n%O%n%A%n%C%n%S%n%Z","require":"ACSZ","upper":"AC","state_name_type":"oblast","label_overrides":[{"field":"CS","message":"MSG_OFFICE_UNIT_NUMBER"}]}"#,
    ),
    ("RW", r#"{"name":"RWANDA","upper":"AC"}"#),
    ("SA", r#"{"name":"SAUDI ARABIA","fmt":"%N%n%O%n%A%n%C %Z"}"#),
    ("SB", r#"{"name":"SOLOMON ISLANDS"}"#),
    (
        "SC",
        r#"{"name":"SEYCHELLES","fmt":"%N%n%O%n%A%n%C%n%S","upper":"S","state_name_type":"island"}"#,
    ),
    ("SD", r#"{"name":"SUDAN","fmt":"%N%n%O%n%A%n%C%n%Z","locality_name_type":"district"}"#),
    (
        "SE",
        r#"{"name":"SWEDEN","fmt":"%O%n%N%n%A%nSE-%Z %C","require":"ACZ","locality_name_type":"post_town","postprefix":"SE-"}"#,
    ),
    ("SG", r#"{"name":"REP. OF SINGAPORE","fmt":"%N%n%O%n%A%nSINGAPORE %Z","require":"AZ"}"#),
    ("SH", r#"{"name":"SAINT HELENA","fmt":"%N%n%O%n%A%n%C%n%Z","require":"ACZ","upper":"CZ"}"#),
    ("SI", r#"{"name":"SLOVENIA","fmt":"%N%n%O%n%A%nSI-%Z %C","postprefix":"SI-"}"#),
    (
        "SJ",
        r#"{"name":"SVALBARD AND JAN MAYEN ISLANDS","fmt":"%N%n%O%n%A%n%Z %C","require":"ACZ","locality_name_type":"post_town"}"#,
    ),
    (
        "SK",
        r#"{"name":"SLOVAKIA","fmt":"%N%n%O%n%A%n%Z %C","require":"ACZ","label_overrides":[{"field":"NH","label":"Obecní část","lang":"cs"},{"field":"NH","label":"Obecný časť","lang":"sk"},{"field":"BI","label":"Descriptive No."},{"field":"BI","label":"Popisné číslo","lang":"cs"},{"field":"BI","label":"Súpisné číslo","lang":"sk"},{"field":"SN","label":"Orientation No."},{"field":"SN","label":"Orientační číslo","lang":"cs"},{"field":"SN","label":"Orientačné číslo","lang":"sk"},{"field":"S1","label":"City District"},{"field":"S1","label":"Městská část","lang":"cs"},{"field":"S1","label":"Mestská časť","lang":"sk"}]}"#,
    ),
    ("SL", r#"{"name":"SIERRA LEONE"}"#),
    ("SM", r#"{"name":"SAN MARINO","fmt":"%N%n%O%n%A%n%Z %C","require":"AZ"}"#),
    ("SN", r#"{"name":"SENEGAL","fmt":"%N%n%O%n%A%n%Z %C"}"#),
    (
        "SO",
        r#"{"name":"SOMALIA","lang":"so","languages":"so","fmt":"%N%n%O%n%A%n%C, %S %Z","require":"ACS","upper":"ACS"}"#,
    ),
    (
        "SR",
        r#"{"name":"SURINAME","lang":"nl","languages":"nl","fmt":"%N%n%O%n%A%n%C%n%S","upper":"AS"}"#,
    ),
    ("SS", r#"{"name":"SOUTH SUDAN"}"#),
    ("ST", r#"{"name":"SAO TOME AND PRINCIPE"}"#),
    (
        "SV",
        r#"{"name":"EL SALVADOR","lang":"es","languages":"es","fmt":"%N%n%O%n%A%n%Z-%C%n%S","require":"ACS","upper":"CSZ"}"#,
    ),
    ("SX", r#"{"name":"SINT MAARTEN"}"#),
    ("SY", r#"{"name":"SYRIA","locality_name_type":"district"}"#),
    ("SZ", r#"{"name":"SWAZILAND","fmt":"%N%n%O%n%A%n%C%n%Z","upper":"ACZ"}"#),
    ("TA", r#"{"name":"TRISTAN DA CUNHA","fmt":"%N%n%O%n%A%n%C%n%Z"}"#),
    (
        "TC",
        r#"{"name":"TURKS AND CAICOS ISLANDS","fmt":"%N%n%O%n%A%n%C%n%Z","require":"ACZ","upper":"CZ"}"#,
    ),
    ("TD", r#"{"name":"CHAD"}"#),
    ("TF", r#"{"name":"FRENCH SOUTHERN TERRITORIES"}"#),
    ("TG", r#"{"name":"TOGO"}"#),
    (
        "TH",
        r#"{"name":"THAILAND","lang":"th","languages":"th","lfmt":"%N%n%O%n%A%n%D, %C%n%S %Z","fmt":"%N%n%O%n%A%n%D %C%n%S %Z","upper":"S","label_overrides":[{"field":"C","label":"Amphoe / Khet"},{"field":"C","label":"อำเภอ/เขต","lang":"th"},{"field":"C","label":"アムプー/ケート","lang":"ja"},{"field":"C","label":"암프/켓","lang":"ko"},{"field":"C","label":"郡/区","lang":"zh"},{"field":"C","label":"郡/區","lang":"zh-TW"},{"field":"C","label":"郡/區","lang":"zh-HK"},{"field":"D","label":"Tambon / Khwaeng"},{"field":"D","label":"ตำบล/แขวง","lang":"th"},{"field":"D","label":"タムボン/クウェーン","lang":"ja"},{"field":"D","label":"땀본/쾡","lang":"ko"},{"field":"D","label":"区/小区","lang":"zh"},{"field":"D","label":"區/小區","lang":"zh-TW"},{"field":"D","label":"區/小區","lang":"zh-HK"}]}"#,
    ),
    ("TJ", r#"{"name":"TAJIKISTAN","fmt":"%N%n%O%n%A%n%Z %C"}"#),
    ("TK", r#"{"name":"TOKELAU"}"#),
    ("TL", r#"{"name":"TIMOR-LESTE"}"#),
    ("TM", r#"{"name":"TURKMENISTAN","fmt":"%N%n%O%n%A%n%Z %C"}"#),
    ("TN", r#"{"name":"TUNISIA","fmt":"%N%n%O%n%A%n%Z %C"}"#),
    ("TO", r#"{"name":"TONGA"}"#),
    (
        "TR",
        r#"{"name":"TURKEY","lang":"tr","languages":"tr","fmt":"%N%n%O%n%A%n%Z %C/%S","require":"ACZ","locality_name_type":"district","label_overrides":[{"field":"C","label":"İlçe","lang":"tr"},{"field":"S","label":"İl","lang":"tr"},{"field":"A4","message":"MSG_NEIGHBORHOOD"}]}"#,
    ),
    ("TT", r#"{"name":"TRINIDAD AND TOBAGO","fmt":"%N%n%O%n%A%n%C%n%Z"}"#),
    (
        "TV",
        r#"{"name":"TUVALU","lang":"tyv","languages":"tyv","fmt":"%N%n%O%n%A%n%C%n%S","upper":"ACS","state_name_type":"island"}"#,
    ),
    (
        "TW",
        r#"{"name":"TAIWAN","lang":"zh-Hant","languages":"zh-Hant","lfmt":"%N%n%O%n%A%n%C, %S %Z","fmt":"%Z%n%S%C%n%A%n%O%n%N","require":"ACSZ","locality_name_type":"district","state_name_type":"county"}"#,
    ),
    ("TZ", r#"{"name":"TANZANIA (UNITED REP.)","fmt":"%N%n%O%n%A%n%Z %C"}"#),
    (
        "UA",
        r#"{"name":"UKRAINE","lang":"uk","languages":"uk","lfmt":"%N%n%O%n%A%n%C%n%S%n%Z","fmt":"%N%n%O%n%A%n%C%n%S%n%Z","require":"ACZ","state_name_type":"oblast","label_overrides":[{"field":"CS","message":"MSG_OFFICE_UNIT_NUMBER"}]}"#,
    ),
    ("UG", r#"{"name":"UGANDA"}"#),
    (
        "UM",
        r#"{"name":"UNITED STATES MINOR OUTLYING ISLANDS","fmt":"%N%n%O%n%A%n%C %S %Z","require":"ACS","upper":"ACNOS","state_name_type":"state","zip_name_type":"zip"}"#,
    ),
    (
        "US",
        r#"{"name":"UNITED STATES","lang":"en","languages":"en","fmt":"%N%n%O%n%A%n%C, %S %Z","require":"ACSZ","upper":"CS","state_name_type":"state","zip_name_type":"zip","width_overrides":"%S:S"}"#,
    ),
    (
        "UY",
        r#"{"name":"URUGUAY","lang":"es","languages":"es","fmt":"%N%n%O%n%A%n%Z %C %S","upper":"CS"}"#,
    ),
    (
        "UZ",
        r#"{"name":"UZBEKISTAN","lang":"uz","languages":"uz~ru","fmt":"%N%n%O%n%A%n%Z %C%n%S","upper":"CS"}"#,
    ),
    ("VA", r#"{"name":"VATICAN","fmt":"%N%n%O%n%A%n%Z %C"}"#),
    ("VC", r#"{"name":"SAINT VINCENT AND THE GRENADINES (ANTILLES)","fmt":"%N%n%O%n%A%n%C %Z"}"#),
    (
        "VE",
        r#"{"name":"VENEZUELA","lang":"es","languages":"es","fmt":"%N%n%O%n%A%n%C %Z, %S","require":"ACS","upper":"CS","state_name_type":"state"}"#,
    ),
    ("VG", r#"{"name":"VIRGIN ISLANDS (BRITISH)","fmt":"%N%n%O%n%A%n%C%n%Z","require":"A"}"#),
    (
        "VI",
        r#"{"name":"VIRGIN ISLANDS (U.S.)","fmt":"%N%n%O%n%A%n%C %S %Z","require":"ACSZ","upper":"ACNOS","state_name_type":"state","zip_name_type":"zip"}"#,
    ),
    (
        "VN",
        r#"{"name":"VIET NAM","lang":"vi","languages":"vi","lfmt":"%N%n%O%n%A%n%C%n%S %Z","fmt":"%N%n%O%n%A%n%C%n%S %Z","label_overrides":[{"field":"S1","label":"Ward/Township/Commune"},{"field":"S1","label":"Phường/Thị trấn/Xã","lang":"vi"}]}"#,
    ),
    ("VU", r#"{"name":"VANUATU"}"#),
    (
        "WF",
        r#"{"name":"WALLIS AND FUTUNA ISLANDS","fmt":"%O%n%N%n%A%n%Z %C %X","require":"ACZ","upper":"ACX"}"#,
    ),
    ("WS", r#"{"name":"SAMOA"}"#),
    ("XK", r#"{"name":"KOSOVO","fmt":"%N%n%O%n%A%n%Z %C"}"#),
    ("YE", r#"{"name":"YEMEN"}"#),
    ("YT", r#"{"name":"MAYOTTE","fmt":"%O%n%N%n%A%n%Z %C %X","require":"ACZ","upper":"ACX"}"#),
    ("ZA", r#"{"name":"SOUTH AFRICA","fmt":"%N%n%O%n%A%n%D%n%C%n%Z","require":"ACZ"}"#),
    ("ZM", r#"{"name":"ZAMBIA","fmt":"%N%n%O%n%A%n%Z %C"}"#),
    ("ZW", r#"{"name":"ZIMBABWE"}"#),
    (
        "ZZ",
        r#"{"fmt":"%N%n%O%n%A%n%C","require":"AC","upper":"C","sublocality_name_type":"suburb","locality_name_type":"city","state_name_type":"province","zip_name_type":"postal"}"#,
    ),
];
