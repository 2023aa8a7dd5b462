//! Built-in lesson content: the challenges and unit tests compiled into the
//! binary. Guarantees the app is useful without an external content bank.

use serde_json::json;

use crate::domain::{Challenge, ChallengeSource, Question, TestCase, UnitTest};

/// Coding challenges attached to lessons, keyed by (unit, lesson).
pub fn builtin_challenges() -> Vec<Challenge> {
  vec![
    Challenge {
      unit: 3,
      lesson: 1,
      source: ChallengeSource::Builtin,
      title: "Create a Greeting Function".into(),
      description: "Create a function that prints a greeting message.".into(),
      instructions: vec![
        "Create a function called 'greet'".into(),
        "Inside the function, print 'Welcome to Roblox Studio!'".into(),
        "Call the function after defining it".into(),
      ],
      starter_code: "-- Write your function here\n\n\n-- Call your function here\n".into(),
      solution: "-- Write your function here\nfunction greet()\n  print(\"Welcome to Roblox Studio!\")\nend\n\n-- Call your function here\ngreet()".into(),
      required_snippets: vec![
        "function greet".into(),
        "Welcome to Roblox Studio".into(),
        "greet()".into(),
      ],
      expected_output: vec!["Welcome to Roblox Studio!".into()],
      test_cases: vec![],
    },
    Challenge {
      unit: 3,
      lesson: 2,
      source: ChallengeSource::Builtin,
      title: "Create a Personalized Greeting".into(),
      description: "Create a function that greets a player by name.".into(),
      instructions: vec![
        "Create a function called 'greetPlayer' that takes a 'name' parameter".into(),
        "Inside the function, print 'Hello, [name]! Welcome to the game!'".into(),
        "Call the function with different names".into(),
      ],
      starter_code: "-- Write your function here\n\n\n-- Call your function with different names\n-- greetPlayer(\"Alex\")\n-- greetPlayer(\"Taylor\")\n".into(),
      solution: "-- Write your function here\nfunction greetPlayer(name)\n  print(\"Hello, \" .. name .. \"! Welcome to the game!\")\nend\n\n-- Call your function with different names\ngreetPlayer(\"Alex\")\ngreetPlayer(\"Taylor\")".into(),
      required_snippets: vec![
        "function greetPlayer".into(),
        "name".into(),
        "Hello".into(),
        "Welcome to the game".into(),
        "greetPlayer(".into(),
      ],
      expected_output: vec![
        "Hello, Alex! Welcome to the game!".into(),
        "Hello, Taylor! Welcome to the game!".into(),
      ],
      test_cases: vec![],
    },
    Challenge {
      unit: 6,
      lesson: 1,
      source: ChallengeSource::Builtin,
      title: "Health Status Challenge".into(),
      description: "Create a function that takes a player's health value and returns a status message based on the health value.".into(),
      instructions: vec![
        "Create a function called 'getHealthStatus' that takes a number parameter 'health'".into(),
        "If health is 100 or greater, return 'Full Health'".into(),
        "If health is between 50 and 99, return 'Moderate Health'".into(),
        "If health is between 25 and 49, return 'Low Health'".into(),
        "If health is below 25, return 'Critical Health'".into(),
      ],
      starter_code: "function getHealthStatus(health)\n  -- Write your code here\n  \n  return \"Unknown Status\"\nend\n\n-- Test your function with these values\nprint(getHealthStatus(100))\nprint(getHealthStatus(75))\nprint(getHealthStatus(30))\nprint(getHealthStatus(10))".into(),
      solution: "function getHealthStatus(health)\n  if health >= 100 then\n    return \"Full Health\"\n  elseif health >= 50 then\n    return \"Moderate Health\"\n  elseif health >= 25 then\n    return \"Low Health\"\n  else\n    return \"Critical Health\"\n  end\nend\n\n-- Test your function with these values\nprint(getHealthStatus(100))\nprint(getHealthStatus(75))\nprint(getHealthStatus(30))\nprint(getHealthStatus(10))".into(),
      required_snippets: vec![
        "health >= 100".into(),
        "health >= 50".into(),
        "health >= 25".into(),
        "Full Health".into(),
        "Moderate Health".into(),
        "Low Health".into(),
        "Critical Health".into(),
      ],
      expected_output: vec![
        "Full Health".into(),
        "Moderate Health".into(),
        "Low Health".into(),
        "Critical Health".into(),
      ],
      test_cases: vec![],
    },
  ]
}

/// Quizzes closing out a unit, keyed by unit.
pub fn builtin_unit_tests() -> Vec<UnitTest> {
  vec![UnitTest {
    unit: 6,
    unit_title: "Control Structures".into(),
    questions: vec![
      Question::MultipleChoice {
        id: 1,
        question: "Which keyword is used to start an if statement in Lua?".into(),
        options: vec!["if".into(), "when".into(), "check".into(), "condition".into()],
        correct_answer: "if".into(),
      },
      Question::MultipleChoice {
        id: 2,
        question: "What symbol is used for 'not equal to' in Lua?".into(),
        options: vec!["!=".into(), "<>".into(), "~=".into(), "/=".into()],
        correct_answer: "~=".into(),
      },
      Question::Coding {
        id: 3,
        question: "Write a function that returns 'Pass' if the score is 70 or higher, otherwise return 'Fail'.".into(),
        starter_code: "function checkScore(score)\n  -- Write your code here\n  \n  return \"Unknown\"\nend".into(),
        solution: "function checkScore(score)\n  if score >= 70 then\n    return \"Pass\"\n  else\n    return \"Fail\"\n  end\nend".into(),
        required_snippets: vec![
          "if".into(),
          "score >= 70".into(),
          "Pass".into(),
          "Fail".into(),
        ],
        test_cases: vec![
          TestCase { input: json!(85), expected: "Pass".into() },
          TestCase { input: json!(70), expected: "Pass".into() },
          TestCase { input: json!(65), expected: "Fail".into() },
        ],
      },
      Question::MultipleChoice {
        id: 4,
        question: "Which of the following is NOT a valid comparison operator in Lua?".into(),
        options: vec!["==".into(), "<=".into(), ">=".into(), "=>".into()],
        correct_answer: "=>".into(),
      },
    ],
  }]
}
