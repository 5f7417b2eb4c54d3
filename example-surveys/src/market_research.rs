use stepform::{Question, SurveyDefinition};

/// The grocery-shopping market research survey, 30 questions in four
/// thematic blocks: demographics, shopping behavior, pain points, and
/// payment preferences. Only the final free-form question is optional.
pub fn market_research() -> SurveyDefinition {
    let questions = vec![
        // Demographics & household context
        Question::single_choice(
            "1",
            "Are you usually the person who does the grocery shopping in your household?",
            [
                "Yes, I do all the grocery shopping",
                "Yes, I do most of it",
                "I share it with others",
                "No, someone else usually does it",
            ],
        )
        .required(),
        Question::single_choice(
            "2",
            "If you don't mind, what's your age range?",
            ["Under 25", "25–40", "40–60", "Above 60"],
        )
        .required(),
        Question::single_choice(
            "3",
            "Do you live alone, with family, or with roommates? About how many people are in your household?",
            [
                "Live alone (1 person)",
                "With partner/spouse (2 people)",
                "Small family (3-4 people)",
                "Large family (5+ people)",
                "With roommates",
                "Other",
            ],
        )
        .required(),
        Question::single_choice(
            "4",
            "Are you currently working, studying, retired, or managing the household?",
            [
                "Working full-time",
                "Working part-time",
                "Student",
                "Retired",
                "Managing household/homemaker",
                "Unemployed",
                "Other",
            ],
        )
        .required(),
        Question::single_choice(
            "5",
            "How do you usually get to the supermarket?",
            [
                "By car",
                "By bus/public transport",
                "Walking",
                "Bicycle/motorcycle",
                "Taxi/ride-sharing",
                "Other",
            ],
        )
        .required(),
        Question::single_choice(
            "6",
            "When you shop, do you usually go for the cheapest options, mix of price/quality, or prefer premium products?",
            [
                "Usually cheapest options",
                "Mix of price and quality",
                "Premium/high-quality products",
                "Depends on the product type",
            ],
        )
        .required(),
        Question::single_choice(
            "7",
            "Do you have children you shop for regularly?",
            [
                "Yes, young children (under 12)",
                "Yes, teenagers (12-18)",
                "Yes, adult children living at home",
                "No children",
                "Not applicable",
            ],
        )
        .required(),
        // Shopping behavior & patterns
        Question::single_choice(
            "8",
            "When you go grocery shopping, what's the main reason?",
            [
                "Stock up for the week",
                "Grab daily items",
                "Handle an emergency need",
                "Planned monthly trip",
                "Just when I feel like it",
            ],
        )
        .required(),
        Question::multiple_choice(
            "9",
            "What kind of items do you usually buy most?",
            [
                "Fresh produce (fruits, vegetables)",
                "Dry goods (rice, pasta, flour)",
                "Snacks and beverages",
                "Household products (cleaning supplies)",
                "Dairy and frozen items",
                "Meat and fish",
            ],
        )
        .with_description("Select all that apply to your typical shopping.")
        .required(),
        Question::single_choice(
            "10",
            "What usually makes you decide it's time to shop?",
            [
                "Empty fridge/pantry",
                "Planned weekly trip",
                "Something missing last minute",
                "When I see good deals",
                "When I have free time",
            ],
        )
        .required(),
        Question::single_choice(
            "11",
            "Do you normally shop on a fixed schedule or only when you suddenly need something?",
            [
                "Fixed schedule (same days each week)",
                "Flexible but regular",
                "Only when needed urgently",
                "Mix of both planned and urgent",
                "No particular pattern",
            ],
        )
        .required(),
        Question::single_choice(
            "12",
            "If you couldn't shop yourself, would you want someone else to do the full weekly basket, or just bring specific urgent items?",
            [
                "Full weekly basket",
                "Just specific urgent items",
                "Depends on the situation",
                "I prefer to always shop myself",
                "Not sure",
            ],
        )
        .required(),
        Question::single_choice(
            "13",
            "How many times per month do you usually go grocery shopping?",
            ["1-2 times", "3-4 times", "5-8 times", "9-12 times", "More than 12 times"],
        )
        .required(),
        Question::single_choice(
            "14",
            "On average, how much do you usually spend in one trip?",
            [
                "Under 2,000 DZD",
                "2,000-5,000 DZD",
                "5,000-8,000 DZD",
                "8,000-15,000 DZD",
                "Over 15,000 DZD",
            ],
        )
        .required(),
        Question::single_choice(
            "15",
            "Is your typical shopping trip for a big basket, or just a few small items?",
            [
                "Always big baskets",
                "Usually big baskets",
                "Mix of big and small",
                "Usually small items",
                "Always small items",
            ],
        )
        .required(),
        Question::single_choice(
            "16",
            "Do you sometimes make a big purchase and sometimes small ones, or is it usually the same each time?",
            [
                "Very consistent amounts",
                "Somewhat consistent",
                "Varies quite a bit",
                "Completely unpredictable",
                "Seasonal variations",
            ],
        )
        .required(),
        // Pain points & current solutions
        Question::textarea(
            "17",
            "What's the most annoying or difficult part of grocery shopping for you?",
        )
        .with_placeholder("Describe your biggest frustration with grocery shopping...")
        .required(),
        Question::textarea(
            "18",
            "Can you tell me about the last time shopping was stressful or went badly? What happened?",
        )
        .with_placeholder("Share a recent negative shopping experience...")
        .required(),
        Question::single_choice(
            "19",
            "How much time do you usually spend going and coming back, and does that bother you?",
            [
                "Under 30 minutes - no problem",
                "30-60 minutes - it's fine",
                "1-2 hours - somewhat bothersome",
                "2+ hours - very frustrating",
                "Time varies too much",
            ],
        )
        .required(),
        Question::multiple_choice(
            "20",
            "Do you ever find any of these to be a hassle?",
            [
                "Carrying heavy bags",
                "Waiting in long lines",
                "Transport to/from store",
                "Finding parking",
                "Crowded stores",
                "None of these bother me",
            ],
        )
        .with_description("Select all that apply to your shopping experience.")
        .required(),
        Question::single_choice(
            "21",
            "How do you usually feel after a big shopping trip?",
            [
                "Satisfied and accomplished",
                "Tired but okay",
                "Exhausted",
                "Frustrated or stressed",
                "Depends on the day",
            ],
        )
        .required(),
        Question::single_choice(
            "22",
            "If you can't go to the supermarket yourself, what do you usually do?",
            [
                "Ask family member to go",
                "Send children/teenagers",
                "Ask neighbor or friend",
                "Use delivery service",
                "Go to nearby corner shop",
                "Wait until I can go myself",
            ],
        )
        .required(),
        Question::single_choice(
            "23",
            "Have you ever tried a delivery service for groceries or food? How was it?",
            [
                "Yes, very satisfied",
                "Yes, it was okay",
                "Yes, but had problems",
                "Yes, but too expensive",
                "No, never tried",
                "No, don't trust it",
            ],
        )
        .required(),
        Question::single_choice(
            "24",
            "When you rely on others or existing services, how well does it work for you?",
            [
                "Works very well",
                "Usually works fine",
                "Sometimes problematic",
                "Often disappointing",
                "Rarely works well",
                "Not applicable",
            ],
        )
        .required(),
        Question::single_choice(
            "25",
            "Do you feel your current way of shopping is good enough, or would you change if something better existed?",
            [
                "Very satisfied with current way",
                "Mostly satisfied",
                "Open to better alternatives",
                "Actively looking for alternatives",
                "Would definitely switch if possible",
            ],
        )
        .required(),
        // Payment preferences & pricing
        Question::single_choice(
            "26",
            "For a typical shopping trip of about 4,000 DZD, what delivery fee would feel fair?",
            [
                "150 DZD or less",
                "150-250 DZD",
                "250-400 DZD",
                "400+ DZD is fine",
                "Would depend on service quality",
            ],
        )
        .required(),
        Question::single_choice(
            "27",
            "Would you prefer paying per delivery, or a monthly subscription that saves money if you order often?",
            [
                "Pay per delivery",
                "Monthly subscription",
                "Depends on the savings",
                "Not sure yet",
                "Would need to try both",
            ],
        )
        .required(),
        Question::single_choice(
            "28",
            "Would you prefer cash on delivery, card, or mobile wallet?",
            [
                "Cash on delivery",
                "Credit/debit card",
                "Mobile wallet (CIB, BaridiMob)",
                "Bank transfer",
                "Flexible - any method",
            ],
        )
        .required(),
        Question::single_choice(
            "29",
            "If there was a promo — like free delivery every 5th order — would that make you use the service more?",
            [
                "Yes, definitely",
                "Probably yes",
                "Maybe slightly",
                "No difference",
                "I prefer consistent low prices",
            ],
        )
        .required(),
        Question::textarea(
            "30",
            "Any additional thoughts about grocery delivery services or what would make them appealing to you?",
        )
        .with_placeholder("Share any other thoughts, concerns, or suggestions..."),
    ];

    SurveyDefinition::new("Market Research Survey", questions)
        .expect("static survey content is valid")
        .with_description("Grocery shopping habits and delivery preferences.")
}
