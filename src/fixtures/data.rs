//! Static vocabularies for market fixtures

/// Cities a market can be placed in
pub const INDIAN_CITIES: &[&str] = &[
    "Mumbai", "Delhi", "Bengaluru", "Kolkata", "Chennai", "Hyderabad", "Pune", "Ahmedabad",
    "Surat", "Lucknow", "Jaipur", "Kanpur", "Nagpur", "Indore", "Thane", "Bhopal",
    "Visakhapatnam", "Pimpri-Chinchwad", "Patna", "Vadodara", "Ghaziabad", "Ludhiana", "Agra",
    "Nashik", "Faridabad", "Meerut", "Rajkot", "Kalyan-Dombivali", "Vasai-Virar", "Varanasi",
    "Srinagar", "Aurangabad", "Dhanbad", "Amritsar", "Navi Mumbai", "Allahabad", "Ranchi",
    "Howrah", "Coimbatore", "Jabalpur", "Gwalior", "Vijayawada", "Jodhpur", "Madurai",
    "Raipur", "Kota", "Guwahati", "Chandigarh", "Solapur", "Hubli-Dharwad", "Mysore",
    "Tiruchirappalli", "Bareilly", "Aligarh", "Tiruppur", "Gurgaon", "Moradabad", "Jalandhar",
    "Bhubaneswar", "Salem", "Warangal", "Guntur", "Bhiwandi", "Saharanpur", "Gorakhpur",
    "Bikaner", "Amravati", "Noida", "Jamshedpur", "Bhilai", "Cuttack", "Firozabad", "Kochi",
    "Nellore", "Bhavnagar", "Dehradun", "Durgapur", "Asansol", "Rourkela", "Ajmer",
    "Ulhasnagar", "Jhansi", "Jammu", "Sangli-Miraj & Kupwad", "Mangalore", "Erode", "Belgaum",
    "Ambattur", "Tirunelveli", "Malegaon", "Gaya", "Jalgaon", "Udaipur", "Maheshtala",
    "Davanagere", "Kozhikode", "Kurnool", "Rajahmundry", "Bokaro", "South Dumdum", "Bellary",
    "Patiala", "Gopalpur", "Agartala", "Bhagalpur", "Muzaffarnagar", "Bhatpara", "Panihati",
    "Latur", "Dhule", "Rohtak", "Korba", "Bhilwara", "Brahmapur", "Muzaffarpur", "Ahmednagar",
    "Mathura", "Kollam", "Avadi", "Kadapa", "Kamarhati", "Sambalpur", "Bilaspur",
    "Shahjahanpur", "Satara", "Bijapur", "Rampur", "Shivamogga", "Chandrapur", "Junagadh",
    "Thrissur", "Alwar", "Bardhaman", "Kulti", "Kakinada", "Nizamabad", "Parbhani", "Tumkur",
    "Hisar", "Ozhukarai", "Bihar Sharif", "Panipat", "Darbhanga", "Bally", "Aizawl", "Dewas",
    "Ichalkaranji", "Tirupati", "Karnal", "Bathinda", "Jalna", "Barasat",
    "Kirari Suleman Nagar", "Purnia", "Satna", "Mau", "Sonipat", "Farrukhabad", "Sagar",
    "Durg", "Imphal", "Ratlam", "Hapur", "Anantapur", "Arrah", "Karimnagar", "Etawah",
    "Ambernath", "North Dumdum", "Bharatpur", "Begusarai", "New Delhi", "Gandhidham",
    "Baranagar", "Tiruvottiyur", "Puducherry", "Sikar", "Thoothukudi", "Rewa", "Mirzapur",
    "Raichur", "Pali", "Ramagundam", "Haridwar", "Vijayanagaram", "Katihar", "Nagercoil",
    "Sri Ganganagar", "Karawal Nagar", "Mango", "Thanjavur", "Bulandshahr", "Ujjain",
    "Singrauli", "Munger", "Panchkula", "Burhanpur", "Kharagpur", "Dindigul", "Gandhinagar",
];

/// Categories a shop can sell
pub const CLOTHING_CATEGORIES: &[&str] = &[
    "Men's Kurtas",
    "Women's Sarees",
    "Kid's Wear",
    "Wedding Attire",
    "Casual Wear",
    "Ethnic Gowns",
    "Lehengas",
    "Sherwanis",
    "Designer Wear",
    "Handloom",
    "Festive Wear",
    "Bridal Wear",
];

/// Rough bounding box of mainland India as `(min, max)` degrees
pub const LATITUDE_RANGE: (f64, f64) = (8.0, 35.0);
/// Rough bounding box of mainland India as `(min, max)` degrees
pub const LONGITUDE_RANGE: (f64, f64) = (68.5, 97.0);
