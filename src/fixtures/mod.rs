//! Compiled-in seed data loaded into the store at startup.

use crate::models::{Photo, Quest, User};

fn quest(
    id: &str,
    title: &str,
    description: &str,
    location: &str,
    points: u32,
    date: &str,
) -> Quest {
    Quest {
        id: id.to_string(),
        title: title.to_string(),
        description: description.to_string(),
        location: location.to_string(),
        points,
        date: date.to_string(),
        completed: false,
    }
}

fn photo(
    id: &str,
    quest: &Quest,
    user: &User,
    image_url: &str,
    timestamp: &str,
    likes: u32,
) -> Photo {
    Photo {
        id: id.to_string(),
        quest_id: quest.id.clone(),
        quest_title: quest.title.clone(),
        user_id: user.id.clone(),
        user_name: user.name.clone(),
        image_url: image_url.to_string(),
        location: quest.location.clone(),
        timestamp: timestamp.to_string(),
        likes,
    }
}

fn user(id: &str, name: &str, completed_quests: u32, total_points: u32) -> User {
    User {
        id: id.to_string(),
        name: name.to_string(),
        completed_quests,
        total_points,
        avatar: None,
    }
}

pub fn quests() -> Vec<Quest> {
    vec![
        quest(
            "1",
            "Рассвет на набережной",
            "Сфотографируйте восход солнца над рекой",
            "Набережная",
            50,
            "2025-06-01T05:00:00.000Z",
        ),
        quest(
            "2",
            "Уличное искусство",
            "Найдите и сфотографируйте граффити в центре города",
            "Центр города",
            30,
            "2025-06-02T12:00:00.000Z",
        ),
        quest(
            "3",
            "Городской парк",
            "Сделайте снимок главного фонтана в парке",
            "Центральный парк",
            40,
            "2025-06-03T15:00:00.000Z",
        ),
        quest(
            "4",
            "Старый мост",
            "Запечатлейте старый мост на закате",
            "Старый мост",
            60,
            "2025-06-04T20:00:00.000Z",
        ),
        quest(
            "5",
            "Ночной город",
            "Сфотографируйте огни города с высоты",
            "Смотровая площадка",
            70,
            "2025-06-05T22:00:00.000Z",
        ),
    ]
}

pub fn users() -> Vec<User> {
    vec![
        user("1", "Анна", 12, 540),
        user("2", "Иван", 15, 690),
        user("3", "Мария", 9, 410),
        user("4", "Дмитрий", 12, 500),
        user("5", "Елена", 7, 300),
        user("6", "Сергей", 4, 180),
    ]
}

pub fn photos() -> Vec<Photo> {
    let quests = quests();
    let users = users();

    vec![
        photo(
            "1",
            &quests[0],
            &users[0],
            "https://picsum.photos/seed/quest1a/800/600",
            "2025-06-01T05:30:00.000Z",
            24,
        ),
        photo(
            "2",
            &quests[1],
            &users[1],
            "https://picsum.photos/seed/quest2a/800/600",
            "2025-05-31T14:10:00.000Z",
            18,
        ),
        photo(
            "3",
            &quests[0],
            &users[2],
            "https://picsum.photos/seed/quest1b/800/600",
            "2025-05-30T06:45:00.000Z",
            31,
        ),
        photo(
            "4",
            &quests[2],
            &users[3],
            "https://picsum.photos/seed/quest3a/800/600",
            "2025-05-29T16:20:00.000Z",
            9,
        ),
    ]
}
